//! Terminal output with colors.

use super::text::{summary_lines, truncation_warning};
use crate::models::{Ipv4Net, NetFacts};
use crate::processing::HostList;
use colored::Colorize;

/// Width of the label column in the summary.
const LABEL_WIDTH: usize = 22;

/// Format a label as a left-aligned `label:` column.
///
/// # Arguments
/// * `label` - The label text
/// * `width` - The minimum width of the column, colon included
pub fn format_label(label: &str, width: usize) -> String {
    let with_colon = format!("{label}:");
    format!("{with_colon:<width$}")
}

/// Network summary with a heading and aligned labels.
pub fn render_summary(facts: &NetFacts) -> String {
    let mut lines = vec!["Results".bold().underline().to_string()];
    for (label, value) in summary_lines(facts) {
        lines.push(format!("{}{}", format_label(label, LABEL_WIDTH).bold(), value));
    }
    lines.join("\n")
}

/// Subnet count followed by one subnet per line.
pub fn render_subnets(subnets: &[Ipv4Net]) -> String {
    let mut lines = vec![format!(
        "{} {}",
        "Subnets generated:".bold(),
        subnets.len().to_string().green()
    )];
    lines.extend(subnets.iter().map(|s| s.to_string()));
    lines.join("\n")
}

/// Host list, with a warning first if it was truncated.
pub fn render_hosts(list: &HostList) -> String {
    let mut lines = vec!["Hosts".bold().underline().to_string()];
    if let Some(warning) = truncation_warning(list) {
        lines.push(warning.yellow().to_string());
    }
    lines.extend(list.hosts.iter().map(|h| h.to_string()));
    lines.join("\n")
}

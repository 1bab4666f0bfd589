//! Plain text rendering of results.

use super::Report;
use crate::models::NetFacts;
use crate::processing::HostList;
use std::net::Ipv4Addr;

/// Rendering of an absent address.
pub const NONE: &str = "-";

/// Render an optional address, `-` when absent.
pub fn format_addr(addr: Option<Ipv4Addr>) -> String {
    addr.map_or_else(|| NONE.to_string(), |a| a.to_string())
}

/// Labelled summary lines in display order.
pub fn summary_lines(facts: &NetFacts) -> Vec<(&'static str, String)> {
    vec![
        ("Network", facts.with_prefix()),
        ("Netmask", format!("{} (/{})", facts.netmask, facts.prefix)),
        ("Broadcast address", facts.broadcast_address.to_string()),
        ("First usable address", format_addr(facts.first_usable)),
        ("Last usable address", format_addr(facts.last_usable)),
        ("Usable hosts", facts.usable_hosts.to_string()),
        ("Total addresses", facts.total_addresses.to_string()),
    ]
}

/// The summary as `Label: value` lines, ready to copy.
pub fn format_summary(facts: &NetFacts) -> String {
    summary_lines(facts)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// The whole report as uncoloured text: summary, then subnets, then hosts.
pub fn format_report(report: &Report) -> String {
    let mut out = format_summary(&report.summary);
    if let Some(subnets) = &report.subnets {
        out.push_str(&format!("\n\nSubnets generated: {}", subnets.len()));
        for subnet in subnets {
            out.push_str(&format!("\n{subnet}"));
        }
    }
    if let Some(hosts) = &report.hosts {
        out.push_str("\n\nHosts");
        if let Some(warning) = truncation_warning(hosts) {
            out.push_str(&format!("\n{warning}"));
        }
        for host in &hosts.hosts {
            out.push_str(&format!("\n{host}"));
        }
    }
    out
}

/// Warning for a truncated host list, `None` if nothing was cut.
pub fn truncation_warning(list: &HostList) -> Option<String> {
    list.truncated.then(|| {
        format!(
            "The network has {} hosts, only the first {} are shown.",
            list.total,
            list.hosts.len()
        )
    })
}

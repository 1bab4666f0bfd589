//! Command line front end.
//!
//! Kept out of `main.rs` so it can be tested.

use crate::config::Config;
use crate::error::Error;
use crate::output::{format_report, format_rows, terminal, Report};
use crate::processing::{describe, enumerate_hosts, enumerate_subnets, parse};
use clap::{Parser, ValueEnum};

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Coloured, aligned output
    #[default]
    Terminal,
    /// Uncoloured text, ready to copy
    Plain,
    /// `key=value` summary rows
    Kv,
    /// JSON document
    Json,
}

/// IPv4 subnet calculator.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "subnet-calc", version)]
pub struct Args {
    /// Address or CIDR block, e.g. 192.168.10.0/24 or 192.168.10.5
    pub input: String,

    /// Prefix length used when INPUT has none
    #[arg(short, long)]
    pub prefix: Option<u8>,

    /// Split the network into subnets with this prefix length
    #[arg(short, long, value_name = "NEW_PREFIX")]
    pub subnets: Option<u8>,

    /// List the usable hosts
    #[arg(long)]
    pub hosts: bool,

    /// Most subnets to generate
    #[arg(long)]
    pub subnet_limit: Option<usize>,

    /// Most hosts to list
    #[arg(long)]
    pub host_limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Run every calculation the arguments ask for.
///
/// Flags override `config`. Nothing is returned on error, not even the summary.
pub fn build_report(args: &Args, config: &Config) -> Result<Report, Error> {
    let net = parse(&args.input, args.prefix.or(config.default_prefix))?;
    log::info!("Parsed {:?} as {net}", args.input);

    let mut report = Report::new(describe(&net));

    if let Some(new_prefix) = args.subnets {
        let limit = args.subnet_limit.unwrap_or(config.subnet_limit);
        let subnets = enumerate_subnets(&net, new_prefix, limit)?;
        log::info!("Split {net} into {} /{new_prefix} subnets", subnets.len());
        report.subnets = Some(subnets);
    }

    if args.hosts {
        let limit = args.host_limit.unwrap_or(config.host_limit);
        let hosts = enumerate_hosts(&net, limit);
        if hosts.truncated {
            log::warn!(
                "{net} has {} hosts, listing the first {}",
                hosts.total,
                hosts.hosts.len()
            );
        }
        report.hosts = Some(hosts);
    }

    Ok(report)
}

/// Render a report in the requested format.
///
/// `Kv` only carries the summary rows.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Plain => format_report(report),
        OutputFormat::Kv => format_rows(&report.summary),
        OutputFormat::Terminal => {
            let mut sections = vec![terminal::render_summary(&report.summary)];
            if let Some(subnets) = &report.subnets {
                sections.push(terminal::render_subnets(subnets));
            }
            if let Some(hosts) = &report.hosts {
                sections.push(terminal::render_hosts(hosts));
            }
            sections.join("\n\n")
        }
    };
    Ok(out)
}

/// Build the report and return it rendered for printing.
pub fn run(args: &Args, config: Config) -> Result<String, Box<dyn std::error::Error>> {
    let report = build_report(args, &config)?;
    Ok(render(&report, args.format)?)
}

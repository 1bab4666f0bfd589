//! Structured results for export.
//!
//! Flat key/value rows and a serializable [`Report`]. The file format is
//! left to the caller.

use super::text::format_addr;
use crate::models::{Ipv4Net, NetFacts};
use crate::processing::HostList;
use serde::Serialize;

/// Summary as flat `(key, value)` rows.
///
/// Keys: `network, netmask, broadcast, first_usable, last_usable,
/// usable_hosts, total_addresses`.
pub fn summary_rows(facts: &NetFacts) -> Vec<(&'static str, String)> {
    vec![
        ("network", facts.with_prefix()),
        ("netmask", facts.netmask.to_string()),
        ("broadcast", facts.broadcast_address.to_string()),
        ("first_usable", format_addr(facts.first_usable)),
        ("last_usable", format_addr(facts.last_usable)),
        ("usable_hosts", facts.usable_hosts.to_string()),
        ("total_addresses", facts.total_addresses.to_string()),
    ]
}

/// Summary rows as `key=value` lines.
pub fn format_rows(facts: &NetFacts) -> String {
    summary_rows(facts)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Everything computed for one request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: NetFacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Ipv4Net>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<HostList>,
}

impl Report {
    pub fn new(summary: NetFacts) -> Report {
        Report {
            summary,
            subnets: None,
            hosts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{describe, enumerate_hosts, enumerate_subnets, parse};

    #[test]
    fn test_summary_rows_32() {
        let facts = describe(&parse("10.0.0.5/32", None).unwrap());
        let rows = summary_rows(&facts);
        let keys: Vec<&str> = rows.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "network",
                "netmask",
                "broadcast",
                "first_usable",
                "last_usable",
                "usable_hosts",
                "total_addresses"
            ]
        );
        assert_eq!(rows[0].1, "10.0.0.5/32");
        assert_eq!(rows[1].1, "255.255.255.255");
        assert_eq!(rows[3].1, "10.0.0.5");
        assert_eq!(rows[4].1, "10.0.0.5");
        assert_eq!(rows[5].1, "1");
    }

    #[test]
    fn test_format_rows_24() {
        let facts = describe(&parse("192.168.10.5/24", None).unwrap());
        assert_eq!(
            format_rows(&facts),
            "network=192.168.10.0/24\n\
             netmask=255.255.255.0\n\
             broadcast=192.168.10.255\n\
             first_usable=192.168.10.1\n\
             last_usable=192.168.10.254\n\
             usable_hosts=254\n\
             total_addresses=256"
        );
    }

    #[test]
    fn test_report_json() {
        let net = parse("192.168.1.0/30", None).unwrap();
        let mut report = Report::new(describe(&net));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["network"], "192.168.1.0/30");
        assert_eq!(json["summary"]["first_usable"], "192.168.1.1");
        assert_eq!(json["summary"]["usable_hosts"], 2);
        assert!(json.get("subnets").is_none());
        assert!(json.get("hosts").is_none());

        report.subnets = Some(enumerate_subnets(&net, 31, 10).unwrap());
        report.hosts = Some(enumerate_hosts(&net, 10));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["subnets"],
            serde_json::json!(["192.168.1.0/31", "192.168.1.2/31"])
        );
        assert_eq!(
            json["hosts"],
            serde_json::json!({
                "hosts": ["192.168.1.1", "192.168.1.2"],
                "total": 2,
                "truncated": false
            })
        );
    }
}

//! Integration tests for subnet-calculator
//!
//! These tests drive the public API from text input to enumerated lists.

use std::net::Ipv4Addr;
use subnet_calculator::{
    describe, enumerate_hosts, enumerate_subnets, output::format_summary, parse,
    EnumerationError, Ipv4Net, ParseError, DEFAULT_HOST_LIMIT, DEFAULT_SUBNET_LIMIT,
};

#[test]
fn test_full_workflow() {
    let net = parse(" 192.168.10.77 ", Some(24)).expect("Failed to parse input");
    assert_eq!(net.to_string(), "192.168.10.0/24");

    let facts = describe(&net);
    assert_eq!(facts.network_address, Ipv4Addr::new(192, 168, 10, 0));
    assert_eq!(facts.broadcast_address, Ipv4Addr::new(192, 168, 10, 255));
    assert_eq!(facts.usable_hosts, 254);
    assert_eq!(facts.total_addresses, 256);

    let subnets =
        enumerate_subnets(&net, 27, DEFAULT_SUBNET_LIMIT).expect("Failed to split network");
    assert_eq!(subnets.len(), 8);
    assert_eq!(subnets[7].to_string(), "192.168.10.224/27");

    // Subnets tile the parent without gaps.
    for pair in subnets.windows(2) {
        assert_eq!(pair[0].next(), Some(pair[1]));
    }

    let hosts = enumerate_hosts(&subnets[7], DEFAULT_HOST_LIMIT);
    assert_eq!(hosts.total, 30);
    assert_eq!(hosts.hosts.first(), Some(&Ipv4Addr::new(192, 168, 10, 225)));
    assert_eq!(hosts.hosts.last(), Some(&Ipv4Addr::new(192, 168, 10, 254)));
    assert!(!hosts.truncated);
}

#[test]
fn test_host_bits_are_normalized() {
    assert_eq!(
        parse("192.168.10.5/24", None).unwrap(),
        parse("192.168.10.0/24", None).unwrap()
    );
}

#[test]
fn test_edge_prefixes() {
    let single = describe(&parse("10.0.0.5/32", None).unwrap());
    assert_eq!(single.usable_hosts, 1);
    assert_eq!(single.first_usable, Some(Ipv4Addr::new(10, 0, 0, 5)));
    assert_eq!(single.last_usable, Some(Ipv4Addr::new(10, 0, 0, 5)));

    let p2p = describe(&parse("192.168.1.0/31", None).unwrap());
    assert_eq!(p2p.usable_hosts, 2);
    assert_eq!(p2p.first_usable, Some(Ipv4Addr::new(192, 168, 1, 0)));
    assert_eq!(p2p.last_usable, Some(Ipv4Addr::new(192, 168, 1, 1)));

    let everything = describe(&parse("0.0.0.0/0", None).unwrap());
    assert_eq!(everything.total_addresses, 1u64 << 32);
}

#[test]
fn test_enumeration_errors() {
    let net = parse("192.168.0.0/24", None).unwrap();
    assert_eq!(
        enumerate_subnets(&net, 16, DEFAULT_SUBNET_LIMIT),
        Err(EnumerationError::SupernetRequested {
            requested: 16,
            current: 24
        })
    );

    let big = parse("10.0.0.0/8", None).unwrap();
    assert_eq!(
        enumerate_subnets(&big, 32, 2000),
        Err(EnumerationError::ResultTooLarge {
            count: 16_777_216,
            limit: 2000
        })
    );

    let same = parse("10.0.0.0/24", None).unwrap();
    assert_eq!(enumerate_subnets(&same, 24, 2000), Ok(vec![same]));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse("", None), Err(ParseError::EmptyInput));
    assert!(matches!(
        parse("192.168.1.256/24", None),
        Err(ParseError::InvalidAddress(_))
    ));
    assert!(matches!(
        parse("192.168.1.0/33", None),
        Err(ParseError::InvalidPrefix(_))
    ));
}

#[test]
fn test_round_trip_through_text() {
    for text in ["10.0.0.0/8", "172.16.0.0/12", "192.168.1.128/25", "8.8.8.8/32"] {
        let net: Ipv4Net = text.parse().unwrap();
        let facts = describe(&net);
        assert_eq!(parse(&facts.with_prefix(), None).unwrap().addr(), net.addr());
    }
}

#[test]
fn test_summary_text_for_slash_30() {
    let facts = describe(&parse("10.10.10.9/30", None).unwrap());
    let text = format_summary(&facts);
    assert!(text.starts_with("Network: 10.10.10.8/30\n"));
    assert!(text.contains("First usable address: 10.10.10.9"));
    assert!(text.contains("Last usable address: 10.10.10.10"));
    assert!(text.ends_with("Total addresses: 4"));
}

//! Listing the usable host addresses of a network.

use super::describe::{usable_hosts, usable_range};
use crate::models::Ipv4Net;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::ops::Range;

/// Default cap on the number of hosts [`enumerate_hosts`] will build.
pub const DEFAULT_HOST_LIMIT: usize = 5000;

/// A possibly truncated list of host addresses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostList {
    /// Usable hosts in ascending order, at most `limit` of them.
    pub hosts: Vec<Ipv4Addr>,
    /// Number of usable hosts in the network.
    pub total: u64,
    /// True when `hosts` holds fewer than `total` entries.
    pub truncated: bool,
}

/// Build the first `limit` usable hosts of `net`.
///
/// The total comes from the prefix length alone, so a `/0` is cheap.
pub fn enumerate_hosts(net: &Ipv4Net, limit: usize) -> HostList {
    let total = usable_hosts(net.prefix());
    let hosts: Vec<Ipv4Addr> = Hosts::new(net).take(limit).collect();

    HostList {
        truncated: (hosts.len() as u64) < total,
        hosts,
        total,
    }
}

/// Lazy iterator over the usable hosts of a network.
///
/// Follows the same rules as [`describe`](super::describe): `/31` yields both
/// addresses and `/32` yields the single one.
#[derive(Debug, Clone)]
pub struct Hosts {
    range: Range<u64>,
}

impl Hosts {
    pub fn new(net: &Ipv4Net) -> Hosts {
        let range = match usable_range(net) {
            Some((first, last)) => first as u64..last as u64 + 1,
            None => 0..0,
        };
        Hosts { range }
    }
}

impl Iterator for Hosts {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        self.range.next().map(|bits| Ipv4Addr::from(bits as u32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.range.end - self.range.start).unwrap_or(usize::MAX);
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        self.range.nth(n).map(|bits| Ipv4Addr::from(bits as u32))
    }
}

impl DoubleEndedIterator for Hosts {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        self.range.next_back().map(|bits| Ipv4Addr::from(bits as u32))
    }
}

// At most 2^32 - 2 items, which fits a 32-bit usize.
impl ExactSizeIterator for Hosts {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse;

    fn net(s: &str) -> Ipv4Net {
        parse(s, None).unwrap()
    }

    fn addrs(list: &[&str]) -> Vec<Ipv4Addr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_hosts_slash_29() {
        let list = enumerate_hosts(&net("10.0.0.0/29"), DEFAULT_HOST_LIMIT);
        assert_eq!(
            list.hosts,
            addrs(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"])
        );
        assert_eq!(list.total, 6);
        assert!(!list.truncated);
    }

    #[test]
    fn test_hosts_slash_31_and_32() {
        let list = enumerate_hosts(&net("192.168.1.0/31"), DEFAULT_HOST_LIMIT);
        assert_eq!(list.hosts, addrs(&["192.168.1.0", "192.168.1.1"]));
        assert_eq!(list.total, 2);

        let list = enumerate_hosts(&net("10.0.0.5/32"), DEFAULT_HOST_LIMIT);
        assert_eq!(list.hosts, addrs(&["10.0.0.5"]));
        assert_eq!(list.total, 1);
        assert!(!list.truncated);
    }

    #[test]
    fn test_hosts_truncated() {
        let list = enumerate_hosts(&net("10.0.0.0/8"), DEFAULT_HOST_LIMIT);
        assert_eq!(list.hosts.len(), DEFAULT_HOST_LIMIT);
        assert_eq!(list.total, 16_777_214);
        assert!(list.truncated);
        assert_eq!(list.hosts[0], Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(list.hosts[4999], Ipv4Addr::new(10, 0, 19, 136));
    }

    #[test]
    fn test_hosts_whole_space_is_cheap() {
        let list = enumerate_hosts(&net("0.0.0.0/0"), 3);
        assert_eq!(list.hosts, addrs(&["0.0.0.1", "0.0.0.2", "0.0.0.3"]));
        assert_eq!(list.total, 4_294_967_294);
        assert!(list.truncated);
    }

    #[test]
    fn test_hosts_limit_equal_to_total() {
        let list = enumerate_hosts(&net("10.0.0.0/30"), 2);
        assert_eq!(list.hosts.len(), 2);
        assert!(!list.truncated);

        let list = enumerate_hosts(&net("10.0.0.0/30"), 0);
        assert!(list.hosts.is_empty());
        assert!(list.truncated);
    }

    #[test]
    fn test_hosts_iterator() {
        let hosts = Hosts::new(&net("255.255.255.248/29"));
        assert_eq!(hosts.len(), 6);
        assert_eq!(hosts.clone().next_back(), Some(Ipv4Addr::new(255, 255, 255, 254)));
        assert_eq!(hosts.clone().nth(2), Some(Ipv4Addr::new(255, 255, 255, 251)));
        assert_eq!(Hosts::new(&net("0.0.0.0/0")).len(), 4_294_967_294);
    }
}

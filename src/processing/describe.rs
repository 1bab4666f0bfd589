//! Network boundaries, usable host range and counts.

use crate::models::{Ipv4Net, NetFacts, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Number of usable host addresses for a prefix length.
///
/// `/32` is a single host, `/31` is a point-to-point link where both
/// addresses are usable (RFC 3021). Otherwise network and broadcast are
/// excluded.
pub fn usable_hosts(prefix: u8) -> u64 {
    match prefix.min(MAX_LENGTH) {
        32 => 1,
        31 => 2,
        p => (1u64 << (MAX_LENGTH - p)).saturating_sub(2),
    }
}

/// Lowest and highest usable address as `u32`, `None` if there are none.
pub(crate) fn usable_range(net: &Ipv4Net) -> Option<(u32, u32)> {
    let network = u32::from(net.addr());
    let broadcast = u32::from(net.broadcast());
    match net.prefix() {
        32 | 31 => Some((network, broadcast)),
        p if usable_hosts(p) == 0 => None,
        _ => Some((network + 1, broadcast - 1)),
    }
}

/// Compute the [`NetFacts`] of a network.
pub fn describe(net: &Ipv4Net) -> NetFacts {
    let range = usable_range(net);

    NetFacts {
        network: *net,
        network_address: net.addr(),
        broadcast_address: net.broadcast(),
        netmask: net.netmask(),
        hostmask: net.hostmask(),
        prefix: net.prefix(),
        total_addresses: net.num_addresses(),
        usable_hosts: usable_hosts(net.prefix()),
        first_usable: range.map(|(first, _)| Ipv4Addr::from(first)),
        last_usable: range.map(|(_, last)| Ipv4Addr::from(last)),
    }
}

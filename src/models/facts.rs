//! Derived facts about a network.

use super::Ipv4Net;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Read-only view computed from an [`Ipv4Net`] by
/// [`describe`](crate::processing::describe).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetFacts {
    /// The network in `a.b.c.d/p` form.
    pub network: Ipv4Net,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    /// Wildcard mask.
    pub hostmask: Ipv4Addr,
    pub prefix: u8,
    /// Every address in the block, `2^(32 - prefix)`.
    pub total_addresses: u64,
    /// Addresses assignable to hosts.
    pub usable_hosts: u64,
    /// Lowest usable address, `None` if the block has no usable host.
    pub first_usable: Option<Ipv4Addr>,
    /// Highest usable address, `None` if the block has no usable host.
    pub last_usable: Option<Ipv4Addr>,
}

impl NetFacts {
    /// `"<network_address>/<prefix>"`.
    pub fn with_prefix(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix)
    }
}

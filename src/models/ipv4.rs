//! IPv4 address and CIDR block utilities.
//!
//! Provides the [`Ipv4Net`] network descriptor along with the bit helpers
//! used for subnet calculations. All arithmetic is done on the `u32` form of
//! an address; counts are `u64` so a `/0` block does not overflow.

use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a netmask as u32.
///
/// Lengths above [`MAX_LENGTH`] are treated as 32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Returns the first address after the block of size `len` holding `addr`.
///
/// `None` when the block ends at 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let network_bits = u32::from(cut_addr(addr, len)) as u64;
    let next_bits = network_bits + block_size(len);
    u32::try_from(next_bits).ok().map(Ipv4Addr::from)
}

/// Prefix length of a contiguous netmask, `None` if the ones are not contiguous.
pub fn prefix_from_mask(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    if ones + mask.trailing_zeros() == MAX_LENGTH as u32 {
        Some(ones as u8)
    } else {
        None
    }
}

/// An IPv4 network: a base address and a prefix length.
///
/// The base address never has host bits set, constructors mask them away.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Net {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Net {
    /// Create a network, clearing any host bits of `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Net, ParseError> {
        if prefix > MAX_LENGTH {
            return Err(ParseError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Ipv4Net::from_parts(addr, prefix))
    }

    // Callers guarantee prefix <= 32.
    pub(crate) fn from_parts(addr: Ipv4Addr, prefix: u8) -> Ipv4Net {
        let prefix = prefix.min(MAX_LENGTH);
        Ipv4Net {
            addr: cut_addr(addr, prefix),
            prefix,
        }
    }

    /// The network (lowest) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(get_cidr_mask(self.prefix))
    }

    /// Wildcard mask, the complement of the netmask.
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!get_cidr_mask(self.prefix))
    }

    /// The broadcast (highest) address.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }

    pub fn num_addresses(&self) -> u64 {
        block_size(self.prefix)
    }

    /// True if `addr` falls inside this network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        cut_addr(addr, self.prefix) == self.addr
    }

    /// True if this network lies entirely inside `other` (a network is a subnet of itself).
    pub fn is_subnet_of(&self, other: &Ipv4Net) -> bool {
        other.prefix <= self.prefix && other.contains(self.addr)
    }

    pub fn is_supernet_of(&self, other: &Ipv4Net) -> bool {
        other.is_subnet_of(self)
    }

    /// The adjacent block of the same size, `None` past the end of the address space.
    pub fn next(&self) -> Option<Ipv4Net> {
        ip_after_subnet(self.addr, self.prefix).map(|addr| Ipv4Net {
            addr,
            prefix: self.prefix,
        })
    }
}

impl fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for Ipv4Net {
    type Err = ParseError;

    /// Parse `a.b.c.d/p`; a bare address is a `/32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::processing::parse(s, None)
    }
}

impl Serialize for Ipv4Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

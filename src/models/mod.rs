//! Domain models for the subnet calculator.
//!
//! - [`Ipv4Net`] - IPv4 network descriptor with CIDR notation support
//! - [`NetFacts`] - Facts derived from a network

mod facts;
mod ipv4;

// Re-export public types
pub use facts::NetFacts;
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, ip_after_subnet, prefix_from_mask,
    Ipv4Net, MAX_LENGTH,
};

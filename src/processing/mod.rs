//! Subnet calculation logic.
//!
//! - [`parse`](parse()) - Text to network descriptor
//! - [`describe`](describe()) - Boundaries, usable range and counts
//! - [`enumerate_subnets`] - Splitting a network into child subnets
//! - [`enumerate_hosts`] - Listing usable hosts

mod describe;
mod hosts;
mod parse;
mod subnets;

// Re-export public functions
pub use describe::{describe, usable_hosts};
pub use hosts::{enumerate_hosts, HostList, Hosts, DEFAULT_HOST_LIMIT};
pub use parse::parse;
pub use subnets::{enumerate_subnets, subnet_count, Subnets, DEFAULT_SUBNET_LIMIT};

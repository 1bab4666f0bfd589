//! IPv4 subnet calculator.
//!
//! Parse an address or CIDR block, describe its boundaries and usable host
//! range, and split it into subnets or list its hosts.
//!
//! ```
//! use subnet_calculator::{describe, enumerate_subnets, parse};
//!
//! let net = parse("192.168.10.5/24", None).unwrap();
//! let facts = describe(&net);
//! assert_eq!(facts.usable_hosts, 254);
//! assert_eq!(facts.first_usable.unwrap().to_string(), "192.168.10.1");
//!
//! let quarters = enumerate_subnets(&net, 26, 2000).unwrap();
//! assert_eq!(quarters.len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{EnumerationError, Error, ParseError};
pub use models::{Ipv4Net, NetFacts};
pub use processing::{
    describe, enumerate_hosts, enumerate_subnets, parse, HostList, Hosts, Subnets,
    DEFAULT_HOST_LIMIT, DEFAULT_SUBNET_LIMIT,
};

//! Error types returned by the calculator.
//!
//! Every failure is recoverable by the caller and carries the offending
//! value so it can be rendered as a message.

/// Failure to turn text into an [`Ipv4Net`](crate::models::Ipv4Net).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input, expected an IPv4 address or CIDR block")]
    EmptyInput,

    #[error("Invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    #[error("Invalid prefix length: {0:?} (expected 0-32 or a dotted mask)")]
    InvalidPrefix(String),
}

/// Failure to subdivide a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerationError {
    #[error("Invalid prefix length /{0} (expected 0-32)")]
    InvalidPrefix(u8),

    #[error(
        "Prefix /{requested} is shorter than the network prefix /{current}, \
         that is a supernet and cannot be generated as subnets"
    )]
    SupernetRequested { requested: u8, current: u8 },

    #[error("Result too large ({count} subnets), limit is {limit}; choose a longer prefix")]
    ResultTooLarge { count: u64, limit: usize },
}

/// Any error the calculator can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
}

//! Splitting a network into equal child subnets.

use crate::error::EnumerationError;
use crate::models::{Ipv4Net, MAX_LENGTH};

/// Default cap on the number of subnets [`enumerate_subnets`] will build.
pub const DEFAULT_SUBNET_LIMIT: usize = 2000;

/// How many `/new_prefix` blocks fit in `net`, without building them.
pub fn subnet_count(net: &Ipv4Net, new_prefix: u8) -> Result<u64, EnumerationError> {
    if new_prefix > MAX_LENGTH {
        return Err(EnumerationError::InvalidPrefix(new_prefix));
    }
    if new_prefix < net.prefix() {
        return Err(EnumerationError::SupernetRequested {
            requested: new_prefix,
            current: net.prefix(),
        });
    }
    Ok(1u64 << (new_prefix - net.prefix()))
}

/// Split `net` into `/new_prefix` subnets in ascending order.
///
/// The count is checked against `limit` before anything is allocated, so
/// asking for `10.0.0.0/8` in `/32` pieces fails fast.
pub fn enumerate_subnets(
    net: &Ipv4Net,
    new_prefix: u8,
    limit: usize,
) -> Result<Vec<Ipv4Net>, EnumerationError> {
    let count = subnet_count(net, new_prefix)?;
    if count == 1 {
        return Ok(vec![*net]);
    }
    if count > limit as u64 {
        return Err(EnumerationError::ResultTooLarge { count, limit });
    }
    Ok(Subnets::new(net, new_prefix)?.collect())
}

/// Lazy iterator over the `/new_prefix` subnets of a network.
#[derive(Debug, Clone)]
pub struct Subnets {
    cursor: Option<Ipv4Net>,
    remaining: u64,
}

impl Subnets {
    pub fn new(net: &Ipv4Net, new_prefix: u8) -> Result<Subnets, EnumerationError> {
        let remaining = subnet_count(net, new_prefix)?;
        Ok(Subnets {
            cursor: Some(Ipv4Net::from_parts(net.addr(), new_prefix)),
            remaining,
        })
    }
}

impl Iterator for Subnets {
    type Item = Ipv4Net;

    fn next(&mut self) -> Option<Ipv4Net> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.remaining -= 1;
        self.cursor = current.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

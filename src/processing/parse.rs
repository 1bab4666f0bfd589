//! Turning user text into an [`Ipv4Net`].

use crate::error::ParseError;
use crate::models::{prefix_from_mask, Ipv4Net, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/]*)(?:/(?P<prefix>[^/]*))?$").expect("Invalid Regex?");
}

/// Parse `a.b.c.d/p` or a bare `a.b.c.d` into a network.
///
/// An explicit prefix wins over `fallback_prefix`. With neither the address
/// is taken as a single host (`/32`). The prefix may also be written as a
/// dotted netmask (`255.255.255.0`) or hostmask (`0.0.0.255`).
///
/// Host bits are not an error: `192.168.10.5/24` is `192.168.10.0/24`.
///
/// # Examples
/// ```
/// use subnet_calculator::parse;
/// let net = parse("192.168.10.5/24", None).unwrap();
/// assert_eq!(net.to_string(), "192.168.10.0/24");
/// assert_eq!(parse("10.1.2.3", Some(8)).unwrap().to_string(), "10.0.0.0/8");
/// ```
pub fn parse(text: &str, fallback_prefix: Option<u8>) -> Result<Ipv4Net, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let caps = CIDR_RE
        .captures(text)
        .ok_or_else(|| ParseError::InvalidAddress(text.to_string()))?;

    let addr = parse_addr(&caps["addr"])?;
    let prefix = match caps.name("prefix") {
        Some(p) => parse_prefix(p.as_str())?,
        None => fallback_prefix.unwrap_or(MAX_LENGTH),
    };

    Ipv4Net::new(addr, prefix)
}

fn parse_addr(s: &str) -> Result<Ipv4Addr, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidAddress(s.to_string()))
}

fn parse_prefix(s: &str) -> Result<u8, ParseError> {
    let invalid = || ParseError::InvalidPrefix(s.to_string());

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let len: u8 = s.parse().map_err(|_| invalid())?;
        return if len > MAX_LENGTH { Err(invalid()) } else { Ok(len) };
    }

    // Dotted form, netmask first then hostmask.
    let mask = u32::from(s.parse::<Ipv4Addr>().map_err(|_| invalid())?);
    prefix_from_mask(mask)
        .or_else(|| prefix_from_mask(!mask))
        .ok_or_else(invalid)
}

//! Syntactic validation of address literals.
//!
//! The IPv6 grammar is deliberately narrow: eight full groups of one to four hex
//! digits, or exactly `::1`, or exactly `::`. Zero compression anywhere else and
//! embedded IPv4 tails are rejected.

use std::sync::OnceLock;

use regex::Regex;

const IPV4_PATTERN: &str =
    r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

const IPV6_PATTERN: &str = r"^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$|^::1$|^::$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    Invalid,
    Ipv4,
    Ipv6,
}

#[allow(clippy::unwrap_used)] // hardcoded pattern
fn ipv4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(IPV4_PATTERN).unwrap())
}

#[allow(clippy::unwrap_used)] // hardcoded pattern
fn ipv6_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(IPV6_PATTERN).unwrap())
}

pub fn is_valid_ipv4(s: &str) -> bool {
    ipv4_pattern().is_match(s)
}

pub fn is_valid_ipv6(s: &str) -> bool {
    ipv6_pattern().is_match(s)
}

/// Runs both grammars and reports which one accepted `s`.
///
/// The grammars are disjoint, a string can never satisfy both.
pub fn classify_format(s: &str) -> AddressFormat {
    let ipv4 = is_valid_ipv4(s);
    let ipv6 = is_valid_ipv6(s);
    match (ipv4, ipv6) {
        (true, _) => AddressFormat::Ipv4,
        (false, true) => AddressFormat::Ipv6,
        (false, false) => AddressFormat::Invalid,
    }
}

/// Splits a valid IPv4 literal into its four octets.
///
/// Returns `None` when `s` does not pass the IPv4 grammar.
pub fn parse_octets(s: &str) -> Option<[u8; 4]> {
    if !is_valid_ipv4(s) {
        return None;
    }
    let mut octets: [u8; 4] = [0; 4];
    for (slot, part) in octets.iter_mut().zip(s.split('.')) {
        *slot = part.parse::<u8>().ok()?;
    }
    Some(octets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::address::format::{self, AddressFormat};

/// Builds the name queried for a PTR record of `ip_addr`.
///
/// `192.168.1.10` becomes `10.1.168.192.in-addr.arpa`, IPv6 addresses are
/// spelled out nibble by nibble under `ip6.arpa`.
pub fn reverse_address_to_ptr(ip_addr: &IpAddr) -> String {
    match ip_addr {
        IpAddr::V4(ipv4_addr) => {
            let [a, b, c, d] = ipv4_addr.octets();
            format!("{d}.{c}.{b}.{a}.in-addr.arpa")
        }
        IpAddr::V6(ipv6_addr) => {
            let mut name: String = String::with_capacity(72);
            for byte in ipv6_addr.octets().iter().rev() {
                let _ = write!(name, "{:x}.{:x}.", byte & 0x0F, byte >> 4);
            }
            name.push_str("ip6.arpa");
            name
        }
    }
}

/// Converts a literal accepted by the address grammar into an [`IpAddr`].
///
/// The grammar tolerates zero-padded octets (`010.000.000.001`) which the
/// standard parser rejects, so IPv4 goes through the decomposed octets.
pub fn to_ip_addr(literal: &str) -> Option<IpAddr> {
    match format::classify_format(literal) {
        AddressFormat::Ipv4 => format::parse_octets(literal).map(|o| IpAddr::V4(Ipv4Addr::from(o))),
        AddressFormat::Ipv6 => literal.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        AddressFormat::Invalid => None,
    }
}

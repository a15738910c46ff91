//! Reads the host's resolver setup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use ipscope_common::debug;

pub const RESOLV_CONF: &str = "/etc/resolv.conf";
pub const HOSTS_FILE: &str = "/etc/hosts";
pub const DNS_PORT: u16 = 53;
pub const FALLBACK_NAMESERVER: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), DNS_PORT);

/// Nameservers configured for this host, in file order.
pub fn nameservers() -> Vec<SocketAddr> {
    read_to_string(Path::new(RESOLV_CONF))
        .map(|contents| parse_nameservers(&contents))
        .unwrap_or_default()
}

/// First configured nameserver, or a public one when none is configured.
pub fn default_nameserver() -> SocketAddr {
    nameservers().into_iter().next().unwrap_or(FALLBACK_NAMESERVER)
}

pub fn parse_nameservers(contents: &str) -> Vec<SocketAddr> {
    contents
        .lines()
        .map(strip_comment)
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => addr.parse::<IpAddr>().ok(),
                _ => None,
            }
        })
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .collect()
}

/// Name listed for `addr` in hosts-file formatted `contents`, first line wins.
pub fn hosts_lookup(contents: &str, addr: IpAddr) -> Option<String> {
    contents.lines().map(strip_comment).find_map(|line| {
        let mut fields = line.split_whitespace();
        let ip: IpAddr = fields.next()?.parse().ok()?;
        if ip != addr {
            return None;
        }
        fields.next().map(str::to_string)
    })
}

fn strip_comment(line: &str) -> &str {
    match line.split_once(['#', ';']) {
        Some((content, _)) => content,
        None => line,
    }
}

fn read_to_string(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            debug!("could not read {}: {e}", path.display());
            None
        }
    }
}

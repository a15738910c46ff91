use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound for a single reverse lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the reverse hostname lookup entirely.
    ///
    /// The report then carries no hostname line at all.
    pub no_dns: bool,
    /// Nameserver to query instead of the system one.
    pub dns_server: Option<SocketAddr>,
    pub timeout: Duration,
    /// Prints the report exactly as plain text, without colors or framing.
    pub plain: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_dns: false,
            dns_server: None,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
            plain: false,
            quiet: 0,
        }
    }
}

pub mod check;
pub mod interactive;

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{ArgAction, Parser};
use ipscope_common::config::Config;

const DNS_PORT: u16 = 53;

#[derive(Parser)]
#[command(name = "ipscope", version)]
#[command(about = "Validate and classify IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    /// Address to classify, e.g. 192.168.1.1 or ::1
    #[arg(required_unless_present = "interactive")]
    pub address: Option<String>,
    /// Keep prompting for addresses until `quit`
    #[arg(short, long, conflicts_with = "address")]
    pub interactive: bool,
    /// Skip the reverse hostname lookup
    #[arg(long)]
    pub no_dns: bool,
    /// Nameserver for reverse lookups instead of the system one
    #[arg(long, value_name = "IP")]
    pub dns_server: Option<IpAddr>,
    /// Give up on the reverse lookup after this many milliseconds
    #[arg(long, value_name = "MS", default_value_t = 3000)]
    pub timeout_ms: u64,
    /// Print the bare text report, without colors or framing
    #[arg(long)]
    pub plain: bool,
    /// Less output (-q hides banner and headers)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_dns: self.no_dns,
            dns_server: self.dns_server.map(|ip| SocketAddr::new(ip, DNS_PORT)),
            timeout: Duration::from_millis(self.timeout_ms),
            plain: self.plain,
            quiet: self.quiet,
        }
    }
}

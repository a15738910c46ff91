use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;

use ipscope_common::config::Config;
use ipscope_common::error::ResolveError;
use ipscope_common::resolver::HostnameResolver;
use ipscope_common::debug;
use ipscope_protocols::dns;

use crate::system;

const MAX_DNS_UDP_LEN: usize = 1232;

/// Answers from a hosts-file formatted file.
pub struct HostsFileResolver {
    path: PathBuf,
}

impl HostsFileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for HostsFileResolver {
    fn default() -> Self {
        Self::new(system::HOSTS_FILE)
    }
}

#[async_trait]
impl HostnameResolver for HostsFileResolver {
    async fn resolve(&self, addr: IpAddr) -> Result<Option<String>, ResolveError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(system::hosts_lookup(&contents, addr)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ResolveError::Io(e)),
        }
    }
}

/// Sends a single PTR query over UDP and waits at most `timeout` for the matching reply.
pub struct DnsResolver {
    server: SocketAddr,
    timeout: Duration,
}

impl DnsResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    async fn exchange(&self, addr: IpAddr) -> Result<Option<String>, ResolveError> {
        let id: u16 = rand::random();
        let query: Vec<u8> =
            dns::create_ptr_packet(&addr, id).map_err(|e| ResolveError::Malformed(e.to_string()))?;

        let local: SocketAddr = match self.server {
            SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket: UdpSocket = UdpSocket::bind(local).await?;
        socket.send_to(&query, self.server).await?;
        debug!("sent PTR query {id:#06x} for {addr} to {}", self.server);

        let mut buf: [u8; MAX_DNS_UDP_LEN] = [0u8; MAX_DNS_UDP_LEN];
        loop {
            let (len, from) = socket.recv_from(&mut buf).await?;
            if from != self.server {
                debug!("dropping datagram from unexpected peer {from}");
                continue;
            }
            match dns::get_hostname(&buf[..len]) {
                Ok(reply) if reply.id != id => debug!("dropping reply with foreign id {:#06x}", reply.id),
                Ok(reply) if reply.is_answer() => return Ok(reply.hostname),
                Ok(reply) => return Err(ResolveError::ServerFailure(reply.rcode)),
                Err(e) => return Err(ResolveError::Malformed(e.to_string())),
            }
        }
    }
}

#[async_trait]
impl HostnameResolver for DnsResolver {
    async fn resolve(&self, addr: IpAddr) -> Result<Option<String>, ResolveError> {
        match tokio::time::timeout(self.timeout, self.exchange(addr)).await {
            Ok(answer) => answer,
            Err(_) => Err(ResolveError::Timeout(self.timeout)),
        }
    }
}

/// Hosts file first, DNS second. A hosts file error does not prevent the DNS query.
pub struct SystemResolver {
    hosts: HostsFileResolver,
    dns: DnsResolver,
}

impl SystemResolver {
    pub fn new(hosts: HostsFileResolver, dns: DnsResolver) -> Self {
        Self { hosts, dns }
    }

    /// Builds the resolver described by `cfg`, or `None` when lookups are disabled.
    pub fn from_config(cfg: &Config) -> Option<Self> {
        if cfg.no_dns {
            return None;
        }
        let server: SocketAddr = cfg.dns_server.unwrap_or_else(system::default_nameserver);
        Some(Self::new(
            HostsFileResolver::default(),
            DnsResolver::new(server, cfg.timeout),
        ))
    }

    pub fn nameserver(&self) -> SocketAddr {
        self.dns.server()
    }
}

#[async_trait]
impl HostnameResolver for SystemResolver {
    async fn resolve(&self, addr: IpAddr) -> Result<Option<String>, ResolveError> {
        match self.hosts.resolve(addr).await {
            Ok(Some(name)) => return Ok(Some(name)),
            Ok(None) => {}
            Err(e) => debug!("hosts file lookup failed: {e}"),
        }
        self.dns.resolve(addr).await
    }
}

use std::path::PathBuf;
use std::time::Duration;

use ipscope_common::error::ResolveError;
use ipscope_common::report::{HostnameLookup, format_report};
use ipscope_common::resolver::HostnameResolver;
use ipscope_core::inspector;
use ipscope_core::resolver::{DnsResolver, HostsFileResolver, SystemResolver};
use tokio::net::UdpSocket;

use crate::utils::{Answer, FakeNameserver};

const TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn ptr_answer_becomes_hostname() {
    let server = FakeNameserver::start(Answer::Ptr("dns.google.")).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let report = inspector::inspect("8.8.8.8", Some(&resolver)).await;

    assert_eq!(report.hostname(), &HostnameLookup::Resolved("dns.google".into()));
    assert!(format_report(&report).ends_with("Hostname: dns.google\n"));
    server.handle.await.unwrap();
}

#[tokio::test]
async fn nxdomain_is_no_record() {
    let server = FakeNameserver::start(Answer::NxDomain).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let answer = resolver.resolve("203.0.113.7".parse().unwrap()).await;

    assert!(matches!(answer, Ok(None)));
    server.handle.await.unwrap();
}

#[tokio::test]
async fn refused_reply_is_reported_as_unresolved() {
    let server = FakeNameserver::start(Answer::Failure(5)).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let answer = resolver.resolve("8.8.4.4".parse().unwrap()).await;
    assert!(matches!(answer, Err(ResolveError::ServerFailure(5))));
    server.handle.await.unwrap();

    let server = FakeNameserver::start(Answer::Failure(2)).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);
    let report = inspector::inspect("8.8.4.4", Some(&resolver)).await;

    assert_eq!(report.hostname(), &HostnameLookup::Unresolved);
    assert!(format_report(&report).ends_with("Hostname: Unable to resolve\n"));
    server.handle.await.unwrap();
}

#[tokio::test]
async fn garbage_reply_keeps_the_report() {
    const GARBAGE: &[u8] = &[0, 1, 0x81, 0x80, 0, 2, 0, 0, 0, 0, 0, 0, 5, b'a', b'b', b'c'];
    let server = FakeNameserver::start(Answer::Raw(GARBAGE)).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let report = inspector::inspect("8.8.8.8", Some(&resolver)).await;

    assert!(report.is_valid());
    assert_eq!(report.hostname(), &HostnameLookup::Unresolved);
    server.handle.await.unwrap();
}

#[tokio::test]
async fn replies_with_foreign_id_are_skipped() {
    let server = FakeNameserver::start(Answer::ForeignIdFirst("router.lan")).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let answer = resolver.resolve("192.168.1.1".parse().unwrap()).await;

    assert_eq!(answer.unwrap().as_deref(), Some("router.lan"));
    server.handle.await.unwrap();
}

#[tokio::test]
async fn ipv6_queries_use_nibble_names() {
    let server = FakeNameserver::start(Answer::Ptr("localhost")).await;
    let resolver = DnsResolver::new(server.addr, TIMEOUT);

    let report = inspector::inspect("::1", Some(&resolver)).await;

    assert_eq!(report.hostname(), &HostnameLookup::Resolved("localhost".into()));
    server.handle.await.unwrap();
}

#[tokio::test]
async fn silent_nameserver_marks_hostname_unresolved() {
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let resolver = DnsResolver::new(silent.local_addr().unwrap(), Duration::from_millis(150));

    let report = inspector::inspect("1.1.1.1", Some(&resolver)).await;

    assert!(report.is_valid());
    assert_eq!(report.hostname(), &HostnameLookup::Unresolved);
    assert!(format_report(&report).ends_with("Hostname: Unable to resolve\n"));
}

#[tokio::test]
async fn hosts_file_is_asked_before_dns() {
    let path: PathBuf = std::env::temp_dir().join(format!("ipscope-hosts-{}", std::process::id()));
    tokio::fs::write(&path, "10.1.2.3 printer printer.lan\n").await.unwrap();

    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let resolver = SystemResolver::new(
        HostsFileResolver::new(&path),
        DnsResolver::new(silent.local_addr().unwrap(), Duration::from_millis(150)),
    );

    let hit = resolver.resolve("10.1.2.3".parse().unwrap()).await;
    let miss = resolver.resolve("10.1.2.4".parse().unwrap()).await;
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(hit.unwrap().as_deref(), Some("printer"));
    assert!(matches!(miss, Err(ResolveError::Timeout(_))));
}

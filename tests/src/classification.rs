use ipscope_common::address::ipv4::Ipv4Class;
use ipscope_common::address::{IpVersion, Scope, SpecialCategory};
use ipscope_common::report::{HostnameLookup, format_report};
use ipscope_core::inspector;

#[tokio::test]
async fn private_class_c_end_to_end() {
    let report = inspector::inspect("192.168.1.1", None).await;
    let c = report.classification().expect("valid");
    assert_eq!(c.version, IpVersion::V4);
    assert_eq!(c.class, Some(Ipv4Class::C));
    assert_eq!(c.scope, Scope::Private);
    assert_eq!(c.special, None);
    assert_eq!(c.binary.as_deref(), Some("11000000.10101000.00000001.00000001"));
    assert_eq!(report.hostname(), &HostnameLookup::Skipped);
}

#[tokio::test]
async fn public_class_a_end_to_end() {
    let report = inspector::inspect("8.8.8.8", None).await;
    let c = report.classification().expect("valid");
    assert_eq!(c.class, Some(Ipv4Class::A));
    assert_eq!(c.scope, Scope::Public);
    assert_eq!(c.special, None);
}

#[tokio::test]
async fn ipv6_loopback_end_to_end() {
    let report = inspector::inspect("::1", None).await;
    let c = report.classification().expect("valid");
    assert_eq!(c.version, IpVersion::V6);
    assert_eq!(c.special, Some(SpecialCategory::Loopback));
}

#[tokio::test]
async fn ipv6_categories() {
    let cases = [
        ("fe80:0000:0000:0000:0000:0000:0000:0001", Some(SpecialCategory::LinkLocal), Scope::Private),
        ("fc00:0000:0000:0000:0000:0000:0000:0001", Some(SpecialCategory::UniqueLocal), Scope::Private),
        ("ff00:0000:0000:0000:0000:0000:0000:0001", Some(SpecialCategory::Multicast), Scope::Public),
        ("2001:4860:4860:0000:0000:0000:0000:8888", None, Scope::Public),
    ];
    for (input, special, scope) in cases {
        let report = inspector::inspect(input, None).await;
        let c = report.classification().expect(input);
        assert_eq!(c.special, special, "{input}");
        assert_eq!(c.scope, scope, "{input}");
    }
}

#[tokio::test]
async fn invalid_inputs_stop_early() {
    for input in ["256.1.1.1", "1.1.1", "abcd::gggg", ""] {
        let report = inspector::inspect(input, None).await;
        assert!(!report.is_valid(), "{input:?}");
        assert!(report.classification().is_none());
        assert!(report.address().is_none());
    }
}

#[test]
fn every_first_octet_has_the_tabled_class() {
    for first in 0..=255u8 {
        let report = ipscope_common::classify(&format!("{first}.0.0.1"));
        let class = report.classification().expect("valid").class;
        let expected = match first {
            0 => None,
            1..=127 => Some(Ipv4Class::A),
            128..=191 => Some(Ipv4Class::B),
            192..=223 => Some(Ipv4Class::C),
            224..=239 => Some(Ipv4Class::D),
            240..=255 => Some(Ipv4Class::E),
        };
        assert_eq!(class, expected, "first octet {first}");
    }
}

#[test]
fn plain_report_for_multicast() {
    let text = format_report(&ipscope_common::classify("224.0.0.251"));
    assert!(text.contains("IP Class: D (224.0.0.0 to 239.255.255.255) - Multicast\n"));
    assert!(text.contains("Type: Public\n"));
    assert!(text.contains("Special: Multicast Address\n"));
    assert!(text.contains("11100000.00000000.00000000.11111011\n"));
}

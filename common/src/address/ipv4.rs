//! IPv4 classification.
//!
//! Everything here works on octets that already passed the grammar in
//! [`super::format`], so no function in this module can fail.

use std::fmt;

use super::{Scope, SpecialCategory};

/// Legacy classful network class, decided by the first octet alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ipv4Class {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Ipv4Class::A => "A",
            Ipv4Class::B => "B",
            Ipv4Class::C => "C",
            Ipv4Class::D => "D",
            Ipv4Class::E => "E",
        };
        f.write_str(letter)
    }
}

/// Class of an address by first octet. `0` belongs to no class.
pub fn ipv4_class(first_octet: u8) -> Option<Ipv4Class> {
    match first_octet {
        1..=127 => Some(Ipv4Class::A),
        128..=191 => Some(Ipv4Class::B),
        192..=223 => Some(Ipv4Class::C),
        224..=239 => Some(Ipv4Class::D),
        240..=255 => Some(Ipv4Class::E),
        0 => None,
    }
}

/// Human label of the class, including its address span.
pub fn class_description(first_octet: u8) -> &'static str {
    match first_octet {
        1..=126 => "A (1.0.0.0 to 126.255.255.255)",
        127 => "A (127.0.0.0 to 127.255.255.255) - Loopback",
        128..=191 => "B (128.0.0.0 to 191.255.255.255)",
        192..=223 => "C (192.0.0.0 to 223.255.255.255)",
        224..=239 => "D (224.0.0.0 to 239.255.255.255) - Multicast",
        240..=255 => "E (240.0.0.0 to 255.255.255.255) - Reserved",
        0 => "Unknown",
    }
}

/// Private or public, first matching rule wins.
///
/// Only the three RFC 1918 blocks and `127.0.0.0/8` count as private.
pub fn ipv4_scope(octets: [u8; 4]) -> Scope {
    match octets {
        [10, ..] => Scope::Private,
        [172, 16..=31, ..] => Scope::Private,
        [192, 168, ..] => Scope::Private,
        [127, ..] => Scope::Private,
        _ => Scope::Public,
    }
}

/// Special-use overlay, checked independently of class and scope.
///
/// Loopback only matches the exact literal `127.0.0.1` and link-local the
/// literal prefix `169.254.`, so zero-padded spellings fall through.
pub fn ipv4_special(literal: &str, octets: [u8; 4]) -> Option<SpecialCategory> {
    if literal == "127.0.0.1" {
        return Some(SpecialCategory::Loopback);
    }
    if literal.starts_with("169.254.") {
        return Some(SpecialCategory::LinkLocal);
    }
    if (224..=239).contains(&octets[0]) {
        return Some(SpecialCategory::Multicast);
    }
    None
}

/// Each octet as eight zero-padded bits, groups joined by `.`.
pub fn to_binary(octets: [u8; 4]) -> String {
    octets
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_boundaries() {
        let cases: [(u8, Option<Ipv4Class>); 12] = [
            (0, None),
            (1, Some(Ipv4Class::A)),
            (126, Some(Ipv4Class::A)),
            (127, Some(Ipv4Class::A)),
            (128, Some(Ipv4Class::B)),
            (191, Some(Ipv4Class::B)),
            (192, Some(Ipv4Class::C)),
            (223, Some(Ipv4Class::C)),
            (224, Some(Ipv4Class::D)),
            (239, Some(Ipv4Class::D)),
            (240, Some(Ipv4Class::E)),
            (255, Some(Ipv4Class::E)),
        ];
        for (first, expected) in cases {
            assert_eq!(ipv4_class(first), expected, "first octet {first}");
        }
    }

    #[test]
    fn loopback_class_has_its_own_label() {
        assert_eq!(class_description(127), "A (127.0.0.0 to 127.255.255.255) - Loopback");
        assert_eq!(class_description(126), "A (1.0.0.0 to 126.255.255.255)");
        assert_eq!(class_description(0), "Unknown");
    }

    #[test]
    fn private_rule_precedence() {
        let cases: [([u8; 4], Scope); 9] = [
            ([10, 0, 0, 1], Scope::Private),
            ([172, 15, 0, 1], Scope::Public),
            ([172, 16, 0, 1], Scope::Private),
            ([172, 31, 255, 255], Scope::Private),
            ([172, 32, 0, 1], Scope::Public),
            ([192, 168, 0, 1], Scope::Private),
            ([193, 168, 0, 1], Scope::Public),
            ([127, 5, 5, 5], Scope::Private),
            ([169, 254, 1, 1], Scope::Public),
        ];
        for (octets, expected) in cases {
            assert_eq!(ipv4_scope(octets), expected, "{octets:?}");
        }
    }

    #[test]
    fn special_overlay_order() {
        assert_eq!(ipv4_special("127.0.0.1", [127, 0, 0, 1]), Some(SpecialCategory::Loopback));
        assert_eq!(ipv4_special("127.5.5.5", [127, 5, 5, 5]), None);
        assert_eq!(ipv4_special("127.000.000.001", [127, 0, 0, 1]), None);
        assert_eq!(ipv4_special("169.254.10.1", [169, 254, 10, 1]), Some(SpecialCategory::LinkLocal));
        assert_eq!(ipv4_special("224.0.0.1", [224, 0, 0, 1]), Some(SpecialCategory::Multicast));
        assert_eq!(ipv4_special("239.255.255.250", [239, 255, 255, 250]), Some(SpecialCategory::Multicast));
        assert_eq!(ipv4_special("240.0.0.1", [240, 0, 0, 1]), None);
        assert_eq!(ipv4_special("8.8.8.8", [8, 8, 8, 8]), None);
    }

    #[test]
    fn binary_rendering() {
        assert_eq!(to_binary([192, 168, 1, 1]), "11000000.10101000.00000001.00000001");
        assert_eq!(to_binary([0, 255, 8, 128]), "00000000.11111111.00001000.10000000");
    }

    #[test]
    fn binary_groups_parse_back_to_octets() {
        for octet in 0..=255u8 {
            let rendered = to_binary([octet, 0, 255, octet]);
            let parsed: Vec<u8> = rendered
                .split('.')
                .map(|group| u8::from_str_radix(group, 2).unwrap())
                .collect();
            assert_eq!(parsed, vec![octet, 0, 255, octet]);
            assert!(rendered.split('.').all(|group| group.len() == 8));
        }
    }
}

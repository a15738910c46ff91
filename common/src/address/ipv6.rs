//! IPv6 classification by textual prefix.
//!
//! The literal is lowercased first, so `FE80:...` and `fe80:...` land in the
//! same category. Only the exact prefixes below are recognised; `fe81:` or
//! `fd12:` are ordinary global addresses here.

use super::{Scope, SpecialCategory};

pub fn ipv6_special(literal: &str) -> Option<SpecialCategory> {
    let literal: String = literal.to_ascii_lowercase();
    match literal.as_str() {
        "::1" => Some(SpecialCategory::Loopback),
        s if s.starts_with("fe80:") => Some(SpecialCategory::LinkLocal),
        s if s.starts_with("fc00:") || s.starts_with("fd00:") => Some(SpecialCategory::UniqueLocal),
        s if s.starts_with("ff00:") => Some(SpecialCategory::Multicast),
        _ => None,
    }
}

/// Scope derived from the special category; everything unlisted is global unicast.
pub fn ipv6_scope(special: Option<SpecialCategory>) -> Scope {
    match special {
        Some(SpecialCategory::Loopback | SpecialCategory::LinkLocal | SpecialCategory::UniqueLocal) => {
            Scope::Private
        }
        Some(SpecialCategory::Multicast) | None => Scope::Public,
    }
}

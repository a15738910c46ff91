//! # Address Classification
//!
//! * [`format`]: decides whether a string is an IPv4 literal, an IPv6 literal or neither.
//! * [`ipv4`]: legacy class, scope, special-use overlay and binary rendering.
//! * [`ipv6`]: special-use category and scope by textual prefix.
//!
//! The shared vocabulary ([`IpVersion`], [`Scope`], [`SpecialCategory`]) is defined here.

pub mod format;
pub mod ipv4;
pub mod ipv6;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Private,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialCategory {
    Loopback,
    LinkLocal,
    Multicast,
    UniqueLocal,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Private => f.write_str("Private"),
            Scope::Public => f.write_str("Public"),
        }
    }
}

impl SpecialCategory {
    /// Label used in reports. Wording differs slightly per family.
    pub fn label(&self, version: IpVersion) -> &'static str {
        match (self, version) {
            (SpecialCategory::Loopback, _) => "Localhost (Loopback)",
            (SpecialCategory::LinkLocal, IpVersion::V4) => "Link-Local Address (APIPA)",
            (SpecialCategory::LinkLocal, IpVersion::V6) => "Link-Local Address",
            (SpecialCategory::Multicast, _) => "Multicast Address",
            (SpecialCategory::UniqueLocal, _) => "Unique Local Address",
        }
    }
}

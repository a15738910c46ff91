//! # Classification Report
//!
//! One [`Report`] is built per query and never changed afterwards; attaching a
//! hostname produces a new value. The plain text rendering here is what every
//! shell shows, the CLI only adds color around the same fields.

use std::fmt;
use std::net::IpAddr;

use crate::address::format::{self, AddressFormat};
use crate::address::ipv4::{self, Ipv4Class};
use crate::address::ipv6;
use crate::address::{IpVersion, Scope, SpecialCategory};
use crate::error::{ClassifyError, ResolveError};
use crate::utils::ip;

pub const RULE_WIDTH: usize = 50;

pub const INVALID_EXAMPLES: [(&str, &str); 2] = [
    ("IPv4", "192.168.1.1, 8.8.8.8, 127.0.0.1"),
    ("IPv6", "2001:0db8:85a3:0000:0000:8a2e:0370:7334, ::1"),
];

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub version: IpVersion,
    /// Legacy class, IPv4 only. `None` for IPv6 and for first octet `0`.
    pub class: Option<Ipv4Class>,
    pub scope: Scope,
    pub special: Option<SpecialCategory>,
    pub octets: Option<[u8; 4]>,
    pub binary: Option<String>,
}

impl Classification {
    fn ipv4(literal: &str, octets: [u8; 4]) -> Self {
        Self {
            version: IpVersion::V4,
            class: ipv4::ipv4_class(octets[0]),
            scope: ipv4::ipv4_scope(octets),
            special: ipv4::ipv4_special(literal, octets),
            octets: Some(octets),
            binary: Some(ipv4::to_binary(octets)),
        }
    }

    fn ipv6(literal: &str) -> Self {
        let special = ipv6::ipv6_special(literal);
        Self {
            version: IpVersion::V6,
            class: None,
            scope: ipv6::ipv6_scope(special),
            special,
            octets: None,
            binary: None,
        }
    }

    /// Class label with its address span, IPv4 only.
    pub fn class_description(&self) -> Option<&'static str> {
        self.octets.map(|octets| ipv4::class_description(octets[0]))
    }

    /// Whether the plain layout carries a `Type:` line.
    ///
    /// IPv6 loopback, link-local and multicast addresses are described by
    /// their `Special:` line alone.
    pub fn has_type_line(&self) -> bool {
        !matches!(
            (self.version, self.special),
            (
                IpVersion::V6,
                Some(SpecialCategory::Loopback | SpecialCategory::LinkLocal | SpecialCategory::Multicast)
            )
        )
    }

    /// Text of the `Type:` line.
    pub fn type_label(&self) -> String {
        match (self.version, self.special) {
            (IpVersion::V6, Some(SpecialCategory::UniqueLocal)) => "Private (Unique Local)".to_string(),
            (IpVersion::V6, None) => "Global Unicast (Public)".to_string(),
            _ => self.scope.to_string(),
        }
    }

    /// Text of the `Special:` line, if the address has one.
    ///
    /// Unique local addresses are already spelled out by the type line.
    pub fn special_label(&self) -> Option<&'static str> {
        match self.special {
            Some(SpecialCategory::UniqueLocal) | None => None,
            Some(category) => Some(category.label(self.version)),
        }
    }
}

/// What became of the reverse lookup for a report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HostnameLookup {
    /// No lookup was attempted.
    #[default]
    Skipped,
    /// The resolver answered without a name different from the input.
    NoRecord,
    Resolved(String),
    /// The resolver failed or timed out.
    Unresolved,
}

impl HostnameLookup {
    /// Folds a resolver answer into a lookup state.
    ///
    /// A canonical name equal to the literal itself carries no information and is dropped.
    pub fn from_answer(literal: &str, answer: Result<Option<String>, ResolveError>) -> Self {
        match answer {
            Ok(Some(name)) if name != literal => HostnameLookup::Resolved(name),
            Ok(_) => HostnameLookup::NoRecord,
            Err(_) => HostnameLookup::Unresolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    input: String,
    outcome: Result<Classification, ClassifyError>,
    hostname: HostnameLookup,
}

impl Report {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &Result<Classification, ClassifyError> {
        &self.outcome
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ClassifyError> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn hostname(&self) -> &HostnameLookup {
        &self.hostname
    }

    /// The classified literal as a socket-level address.
    pub fn address(&self) -> Option<IpAddr> {
        self.classification().and_then(|_| ip::to_ip_addr(&self.input))
    }

    /// Returns the report with `lookup` attached. Invalid reports stay untouched.
    pub fn with_hostname(self, lookup: HostnameLookup) -> Self {
        if !self.is_valid() {
            return self;
        }
        Self {
            hostname: lookup,
            ..self
        }
    }
}

/// Classifies one raw input.
///
/// Surrounding whitespace is ignored. Empty and malformed inputs stop here and
/// carry no partial analysis.
pub fn classify(input: &str) -> Report {
    let literal: &str = input.trim();
    let outcome = if literal.is_empty() {
        Err(ClassifyError::EmptyInput)
    } else {
        match format::classify_format(literal) {
            AddressFormat::Ipv4 => format::parse_octets(literal)
                .map(|octets| Classification::ipv4(literal, octets))
                .ok_or_else(|| ClassifyError::InvalidFormat(literal.to_string())),
            AddressFormat::Ipv6 => Ok(Classification::ipv6(literal)),
            AddressFormat::Invalid => Err(ClassifyError::InvalidFormat(literal.to_string())),
        }
    };

    Report {
        input: literal.to_string(),
        outcome,
        hostname: HostnameLookup::Skipped,
    }
}

/// Renders `report` as the plain text shown to users.
pub fn format_report(report: &Report) -> String {
    report.to_string()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classification = match &self.outcome {
            Err(ClassifyError::EmptyInput) => return writeln!(f, "Please enter an IP address."),
            Err(ClassifyError::InvalidFormat(_)) => {
                write_heading(f, &self.input)?;
                writeln!(f, "❌ Invalid IP Address Format")?;
                writeln!(f, "Please enter a valid IPv4 or IPv6 address.")?;
                writeln!(f)?;
                writeln!(f, "Examples:")?;
                for (family, examples) in INVALID_EXAMPLES {
                    writeln!(f, "{family}: {examples}")?;
                }
                return Ok(());
            }
            Ok(classification) => classification,
        };

        write_heading(f, &self.input)?;
        writeln!(f, "✅ Valid IP Address")?;
        writeln!(f)?;
        writeln!(f, "IP Version: {}", classification.version)?;
        if let Some(description) = classification.class_description() {
            writeln!(f, "IP Class: {description}")?;
        }
        if classification.has_type_line() {
            writeln!(f, "Type: {}", classification.type_label())?;
        }
        if let Some(special) = classification.special_label() {
            writeln!(f, "Special: {special}")?;
        }
        match &classification.binary {
            Some(binary) => {
                writeln!(f)?;
                writeln!(f, "Binary Representation:")?;
                writeln!(f, "{binary}")?;
            }
            None => writeln!(f)?,
        }

        match &self.hostname {
            HostnameLookup::Resolved(name) => writeln!(f, "Hostname: {name}"),
            HostnameLookup::Unresolved => writeln!(f, "Hostname: Unable to resolve"),
            HostnameLookup::Skipped | HostnameLookup::NoRecord => Ok(()),
        }
    }
}

fn write_heading(f: &mut fmt::Formatter<'_>, input: &str) -> fmt::Result {
    writeln!(f, "IP Address: {input}")?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f)
}

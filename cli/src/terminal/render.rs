//! Terminal rendering of a [`Report`], shared by both shells.

use colored::*;
use ipscope_common::address::{IpVersion, Scope};
use ipscope_common::config::Config;
use ipscope_common::error::ClassifyError;
use ipscope_common::report::{self, Classification, HostnameLookup, Report};
use ipscope_common::{error, success, warn};

use crate::terminal::{colors, print};

type Detail = (&'static str, ColoredString);

pub fn report(report: &Report, cfg: &Config) {
    if cfg.plain {
        print::print(report::format_report(report).trim_end_matches('\n'));
        return;
    }

    match report.outcome() {
        Ok(classification) => valid(report, classification, cfg),
        Err(ClassifyError::EmptyInput) => warn!("Please enter an IP address."),
        Err(e @ ClassifyError::InvalidFormat(_)) => invalid(e),
    }
}

fn valid(report: &Report, classification: &Classification, cfg: &Config) {
    print::header(report.input(), cfg.quiet);
    success!("Valid IP Address");

    let details: Vec<Detail> = details(report, classification);
    print::set_key_width(details.iter().map(|(key, _)| *key));
    for (key, value) in details {
        print::aligned_line(key, value);
    }

    if let Some(octets) = classification.octets {
        print::as_tree_one_level(octet_tree(octets));
    }
}

fn invalid(e: &ClassifyError) {
    error!("{e}");
    print::print_status("Please enter a valid IPv4 or IPv6 address.");
    for (family, examples) in report::INVALID_EXAMPLES {
        print::print_status(format!("{family}: {examples}"));
    }
}

fn details(report: &Report, classification: &Classification) -> Vec<Detail> {
    let version_color: Color = match classification.version {
        IpVersion::V4 => colors::IPV4_ADDR,
        IpVersion::V6 => colors::IPV6_ADDR,
    };
    let scope_color: Color = match classification.scope {
        Scope::Private => colors::PRIVATE,
        Scope::Public => colors::PUBLIC,
    };

    let mut details: Vec<Detail> = vec![("Version", classification.version.to_string().color(version_color))];

    if let Some(description) = classification.class_description() {
        details.push(("Class", description.normal()));
    }
    details.push(("Type", classification.type_label().color(scope_color)));
    if let Some(special) = classification.special_label() {
        details.push(("Special", special.color(colors::SPECIAL)));
    }
    if let Some(binary) = &classification.binary {
        details.push(("Binary", binary.color(colors::BINARY)));
    }

    match report.hostname() {
        HostnameLookup::Resolved(name) => details.push(("Hostname", name.color(colors::ACCENT))),
        HostnameLookup::Unresolved => details.push(("Hostname", "Unable to resolve".color(colors::FAILURE))),
        HostnameLookup::Skipped | HostnameLookup::NoRecord => {}
    }

    details
}

fn octet_tree(octets: [u8; 4]) -> Vec<(String, ColoredString)> {
    octets
        .iter()
        .enumerate()
        .map(|(idx, octet)| {
            let value: ColoredString = format!("{octet:>3}  {octet:08b}").color(colors::BINARY);
            (format!("Octet {}", idx + 1), value)
        })
        .collect()
}

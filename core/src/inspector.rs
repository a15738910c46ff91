//! The one use case: classify an input and, when possible, name it.

use ipscope_common::report::{self, HostnameLookup, Report};
use ipscope_common::resolver::HostnameResolver;
use ipscope_common::debug;

/// Classifies `input` and attaches a reverse lookup when `resolver` is given.
///
/// Invalid input is returned without asking the resolver. A failing resolver
/// only marks the hostname as unresolved.
pub async fn inspect(input: &str, resolver: Option<&dyn HostnameResolver>) -> Report {
    let report: Report = report::classify(input);
    let (Some(resolver), Some(addr)) = (resolver, report.address()) else {
        return report;
    };

    let answer = resolver.resolve(addr).await;
    if let Err(e) = &answer {
        debug!("reverse lookup for {addr} failed: {e}");
    }
    let lookup: HostnameLookup = HostnameLookup::from_answer(report.input(), answer);
    report.with_hostname(lookup)
}

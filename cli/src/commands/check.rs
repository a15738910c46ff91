use std::process::ExitCode;

use ipscope_common::config::Config;
use ipscope_common::report::Report;
use ipscope_common::resolver::HostnameResolver;
use ipscope_core::inspector;

use crate::terminal::render;

/// Classifies one address and prints its report.
///
/// Invalid input is a failed run.
pub async fn check(address: &str, cfg: &Config, resolver: Option<&dyn HostnameResolver>) -> ExitCode {
    let report: Report = inspector::inspect(address, resolver).await;
    render::report(&report, cfg);

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

use std::time::Duration;

use thiserror::Error;

/// Terminal failures of a query. Classification stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("no address was given")]
    EmptyInput,
    #[error("'{0}' is neither an IPv4 nor an IPv6 address")]
    InvalidFormat(String),
}

/// Reverse lookup failures. Never fatal for a report.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("resolver i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed answer: {0}")]
    Malformed(String),
    #[error("nameserver failed with rcode {0}")]
    ServerFailure(u8),
}

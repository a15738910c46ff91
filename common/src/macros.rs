//! Logging shorthands.
//!
//! Everything goes through `tracing`; the binary decides how each target is drawn.

/// Target used for report lines that must be written without a status symbol.
pub const PRINT_TARGET: &str = "ipscope::print";

/// Target used for positive outcomes, drawn like `INFO` but with its own symbol.
pub const SUCCESS_TARGET: &str = "ipscope::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ipscope::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!($($arg)*)
    };
}

//! # ipscope-common
//!
//! The classification core shared by every shell.
//!
//! * **[`address`]**: grammar checks and per-family classification.
//! * **[`report`]**: the immutable per-query result and its plain text rendering.
//! * **[`resolver`]**: the port a hostname lookup adapter has to implement.
//! * **[`config`]**: runtime options collected by the shells.
//! * **[`utils`]**: address helpers shared with the protocol crate.

pub mod address;
pub mod config;
pub mod error;
pub mod macros;
pub mod report;
pub mod resolver;
pub mod utils;

pub use report::{Report, classify, format_report};

#[doc(hidden)]
pub use tracing as __tracing;

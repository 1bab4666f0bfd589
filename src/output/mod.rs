//! Output formatting for calculation results.
//!
//! - [`text`] - Plain text summary
//! - [`report`] - Key/value rows and a serializable report
//! - [`terminal`] - Terminal output with colors

pub mod report;
pub mod terminal;
pub mod text;

pub use report::{format_rows, summary_rows, Report};
pub use text::{format_report, format_summary};

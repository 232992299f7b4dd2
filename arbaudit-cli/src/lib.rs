//! Shared pieces of the `locale-key-diff` and `source-line-scan` binaries.

pub mod key_diff;
pub mod line_scan;
pub mod logging;
pub mod validation;

pub use key_diff::{KeyDiffCommandOptions, run_key_diff_command};
pub use line_scan::{LineScanOptions, run_line_scan_command};
pub use logging::init_tracing;

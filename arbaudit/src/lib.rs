#![forbid(unsafe_code)]
//! Audit helpers for Flutter localization projects.
//!
//! Two independent checks live here:
//!
//! - [`key_diff`]: compare the top-level key sets of `.arb` locale files
//!   against a reference file and list missing and extra keys.
//! - [`line_scan`]: list the lines of a source file that contain a literal
//!   text-widget pattern such as `Text('`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use arbaudit::{KeyDiffOptions, LinePatterns, run_key_diff, scan_file};
//!
//! let run = run_key_diff(&KeyDiffOptions::default())?;
//! for report in &run.files {
//!     println!("{}: {} missing, {} extra", report.file, report.missing.len(), report.extra.len());
//! }
//!
//! let scan = scan_file("lib/main.dart", &LinePatterns::default())?;
//! for m in &scan.matches {
//!     println!("{}", m);
//! }
//! # Ok::<(), arbaudit::Error>(())
//! ```

pub mod defaults;
pub mod error;
pub mod key_diff;
pub mod line_scan;
pub mod locale;
pub mod text;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    key_diff::{Comparisons, DiffReport, KeyDiffOptions, KeyDiffRun, diff_key_sets, run_key_diff},
    line_scan::{LineMatch, LinePatterns, ScanReport, scan_file, scan_text},
    locale::LocaleFile,
};

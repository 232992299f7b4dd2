//! Fixed parameters the tools fall back to when run without arguments.
//!
//! Paths are relative to the working directory, which is expected to be the
//! root of a Flutter project.

/// Directory holding the ARB files.
pub const L10N_DIR: &str = "lib/l10n";

/// Locale file treated as the source of truth for expected keys.
pub const REFERENCE_FILE: &str = "app_en.arb";

/// Locale files diffed against the reference, in report order.
pub const COMPARISON_FILES: [&str; 3] = ["app_de.arb", "app_fr.arb", "app_it.arb"];

/// Source file scanned for literal text widgets.
pub const SCAN_FILE: &str = "lib/features/tenant/presentation/pages/tenants_page.dart";

/// Literal patterns a scanned line must contain one of.
pub const TEXT_WIDGET_PATTERNS: [&str; 2] = ["Text('", "const Text("];

/// Extension of locale resource files.
pub const ARB_EXTENSION: &str = "arb";

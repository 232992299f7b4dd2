use crate::validation::{print_or_write, validate_dir_path, validate_output_path};
use arbaudit::{Comparisons, KeyDiffOptions, KeyDiffRun, run_key_diff};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct KeyDiffCommandOptions {
    pub dir: String,
    pub reference: String,
    /// Comparison file names; empty means the built-in list.
    pub compare: Vec<String>,
    pub all: bool,
    pub ignore_metadata: bool,
    pub json: bool,
    pub output: Option<String>,
}

/// Render the per-file text report.
///
/// Each file gets a `=== name ===` header, a `missing <n>` line and an
/// `extra <n>` line, each followed by its keys indented by three spaces.
pub fn render_human(run: &KeyDiffRun) -> String {
    let mut out = String::new();
    for report in &run.files {
        out.push_str(&format!("=== {} ===\n", report.file));
        out.push_str(&format!("missing {}\n", report.missing.len()));
        for key in &report.missing {
            out.push_str(&format!("   {}\n", key));
        }
        out.push_str(&format!("extra {}\n", report.extra.len()));
        for key in &report.extra {
            out.push_str(&format!("   {}\n", key));
        }
    }
    out
}

pub fn render_json(run: &KeyDiffRun) -> Result<String, String> {
    let files: Vec<_> = run
        .files
        .iter()
        .map(|report| {
            json!({
                "file": report.file,
                "language": report.language,
                "counts": {
                    "missing": report.missing.len(),
                    "extra": report.extra.len(),
                },
                "missing": report.missing,
                "extra": report.extra,
            })
        })
        .collect();

    let report = json!({
        "reference": run.reference,
        "files": files,
    });

    serde_json::to_string_pretty(&report)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("Failed to serialize key diff report JSON: {}", e))
}

fn build_options(opts: &KeyDiffCommandOptions) -> KeyDiffOptions {
    let comparisons = if opts.all {
        Comparisons::Discover
    } else if opts.compare.is_empty() {
        KeyDiffOptions::default().comparisons
    } else {
        Comparisons::Named(opts.compare.clone())
    };

    KeyDiffOptions::new()
        .with_dir(&opts.dir)
        .with_reference(opts.reference.clone())
        .with_comparisons(comparisons)
        .with_ignore_metadata(opts.ignore_metadata)
}

/// Run the key diff and print (or write) the report.
///
/// Returns whether every comparison file matched the reference exactly.
pub fn run_key_diff_command(opts: KeyDiffCommandOptions) -> Result<bool, String> {
    validate_dir_path(&opts.dir)?;
    if opts.all && !opts.compare.is_empty() {
        return Err("--all cannot be combined with --compare".to_string());
    }
    if let Some(output) = &opts.output {
        validate_output_path(output)?;
    }

    let run = run_key_diff(&build_options(&opts)).map_err(|e| e.to_string())?;

    let rendered = if opts.json {
        render_json(&run)?
    } else {
        render_human(&run)
    };
    print_or_write(opts.output.as_ref(), &rendered)?;

    Ok(run.is_clean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbaudit::DiffReport;

    fn sample_run() -> KeyDiffRun {
        KeyDiffRun {
            reference: "app_en.arb".to_string(),
            files: vec![
                DiffReport {
                    file: "app_de.arb".to_string(),
                    language: Some("de".to_string()),
                    missing: vec!["c".to_string()],
                    extra: vec!["d".to_string()],
                },
                DiffReport {
                    file: "app_fr.arb".to_string(),
                    language: None,
                    missing: vec![],
                    extra: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_render_human_layout() {
        let expected = "\
=== app_de.arb ===
missing 1
   c
extra 1
   d
=== app_fr.arb ===
missing 0
extra 0
";
        assert_eq!(render_human(&sample_run()), expected);
    }

    #[test]
    fn test_render_human_no_files() {
        let run = KeyDiffRun {
            reference: "app_en.arb".to_string(),
            files: vec![],
        };
        assert_eq!(render_human(&run), "");
    }

    #[test]
    fn test_render_json_shape() {
        let rendered = render_json(&sample_run()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["reference"], "app_en.arb");
        assert_eq!(value["files"][0]["counts"]["missing"], 1);
        assert_eq!(value["files"][0]["extra"][0], "d");
        assert!(value["files"][1]["language"].is_null());
    }

    #[test]
    fn test_build_options_defaults_to_fixed_list() {
        let opts = KeyDiffCommandOptions {
            dir: "lib/l10n".to_string(),
            reference: "app_en.arb".to_string(),
            compare: vec![],
            all: false,
            ignore_metadata: false,
            json: false,
            output: None,
        };
        assert_eq!(build_options(&opts), KeyDiffOptions::default());
    }
}

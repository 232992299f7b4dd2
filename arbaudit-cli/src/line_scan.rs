use crate::validation::{print_or_write, validate_file_path, validate_output_path};
use arbaudit::{LinePatterns, ScanReport, scan_file};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct LineScanOptions {
    pub file: String,
    /// Literal patterns; empty means both text-widget variants.
    pub patterns: Vec<String>,
    pub json: bool,
    pub output: Option<String>,
}

/// One `NNNN: content` line per match, nothing when there are none.
pub fn render_human(report: &ScanReport) -> String {
    report
        .matches
        .iter()
        .map(|m| format!("{}\n", m))
        .collect()
}

pub fn render_json(report: &ScanReport) -> Result<String, String> {
    let body = json!({
        "file": report.file.to_string_lossy(),
        "matches": report.matches,
    });
    serde_json::to_string_pretty(&body)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("Failed to serialize scan report JSON: {}", e))
}

/// Scan the file and print (or write) the matching lines.
///
/// Returns the number of matching lines.
pub fn run_line_scan_command(opts: LineScanOptions) -> Result<usize, String> {
    validate_file_path(&opts.file)?;
    if let Some(output) = &opts.output {
        validate_output_path(output)?;
    }

    let patterns = if opts.patterns.is_empty() {
        LinePatterns::default()
    } else {
        LinePatterns::new(opts.patterns.clone()).map_err(|e| e.to_string())?
    };
    tracing::debug!(file = %opts.file, patterns = ?patterns.as_slice(), "scanning");

    let report = scan_file(&opts.file, &patterns).map_err(|e| e.to_string())?;
    let rendered = if opts.json {
        render_json(&report)?
    } else {
        render_human(&report)
    };
    print_or_write(opts.output.as_ref(), &rendered)?;

    Ok(report.matches.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbaudit::LineMatch;
    use std::path::PathBuf;

    fn sample_report() -> ScanReport {
        ScanReport {
            file: PathBuf::from("tenants_page.dart"),
            matches: vec![
                LineMatch {
                    line: 3,
                    content: "Text('Tenants'),".to_string(),
                },
                LineMatch {
                    line: 17,
                    content: "child: const Text('Add tenant'),".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_render_human() {
        assert_eq!(
            render_human(&sample_report()),
            "0003: Text('Tenants'),\n0017: child: const Text('Add tenant'),\n"
        );
    }

    #[test]
    fn test_render_human_empty() {
        let report = ScanReport {
            file: PathBuf::from("tenants_page.dart"),
            matches: vec![],
        };
        assert_eq!(render_human(&report), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["file"], "tenants_page.dart");
        assert_eq!(value["matches"][1]["line"], 17);
        assert_eq!(value["matches"][0]["content"], "Text('Tenants'),");
    }
}

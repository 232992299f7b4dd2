//! Line-by-line literal scans of a source file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{defaults::TEXT_WIDGET_PATTERNS, error::Error, text::read_text};

/// A matching line of the scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: usize,
    /// Line content without surrounding whitespace.
    pub content: String,
}

impl std::fmt::Display for LineMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}: {}", self.line, self.content)
    }
}

/// Literal substrings a line must contain at least one of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePatterns {
    patterns: Vec<String>,
}

impl Default for LinePatterns {
    /// Both text-widget variants, `Text('` and `const Text(`.
    fn default() -> Self {
        Self {
            patterns: TEXT_WIDGET_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl LinePatterns {
    /// Builds a pattern set from literals; empty literals would match every
    /// line and are rejected.
    pub fn new<I, S>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Err(Error::validation_error("at least one pattern is required"));
        }
        if patterns.iter().any(String::is_empty) {
            return Err(Error::validation_error("pattern cannot be empty"));
        }
        Ok(Self { patterns })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| line.contains(p.as_str()))
    }
}

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as a single break.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into lines on every [`LINE_BREAKS`] character.
///
/// A trailing break does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\x1f')
}

/// Scans text already in memory.
///
/// ```rust
/// use arbaudit::line_scan::{LinePatterns, scan_text};
///
/// let source = "Column(\n  children: [\n    Text('Hi'),\n  ],\n)";
/// let matches = scan_text(source, &LinePatterns::default());
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].to_string(), "0003: Text('Hi'),");
/// ```
pub fn scan_text(text: &str, patterns: &LinePatterns) -> Vec<LineMatch> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| patterns.matches(line))
        .map(|(idx, line)| LineMatch {
            line: idx + 1,
            content: trim_line(line).to_string(),
        })
        .collect()
}

/// Matches found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub file: PathBuf,
    pub matches: Vec<LineMatch>,
}

/// Reads `path` to completion and scans it.
pub fn scan_file<P: AsRef<Path>>(path: P, patterns: &LinePatterns) -> Result<ScanReport, Error> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let matches = scan_text(&text, patterns);
    tracing::info!(file = %path.display(), matches = matches.len(), "line scan finished");
    Ok(ScanReport {
        file: path.to_path_buf(),
        matches,
    })
}

//! Key-set diffs between a reference locale file and its translations.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    defaults::{ARB_EXTENSION, COMPARISON_FILES, L10N_DIR, REFERENCE_FILE},
    error::Error,
    locale::LocaleFile,
};

/// Missing and extra keys of one comparison file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub file: String,
    pub language: Option<String>,
    /// Keys of the reference absent from this file, sorted.
    pub missing: Vec<String>,
    /// Keys of this file absent from the reference, sorted.
    pub extra: Vec<String>,
}

impl DiffReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Result of diffing every comparison file against the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDiffRun {
    pub reference: String,
    pub files: Vec<DiffReport>,
}

impl KeyDiffRun {
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(DiffReport::is_clean)
    }

    pub fn total_missing(&self) -> usize {
        self.files.iter().map(|r| r.missing.len()).sum()
    }

    pub fn total_extra(&self) -> usize {
        self.files.iter().map(|r| r.extra.len()).sum()
    }
}

/// Which comparison files a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparisons {
    /// These file names, in this order.
    Named(Vec<String>),
    /// Every `.arb` file in the directory except the reference, by name.
    Discover,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiffOptions {
    pub dir: PathBuf,
    pub reference: String,
    pub comparisons: Comparisons,
    /// Drop `@`-prefixed ARB metadata keys before diffing.
    pub ignore_metadata: bool,
}

impl Default for KeyDiffOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(L10N_DIR),
            reference: REFERENCE_FILE.to_string(),
            comparisons: Comparisons::Named(
                COMPARISON_FILES.iter().map(|s| s.to_string()).collect(),
            ),
            ignore_metadata: false,
        }
    }
}

impl KeyDiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn with_comparisons(mut self, comparisons: Comparisons) -> Self {
        self.comparisons = comparisons;
        self
    }

    pub fn with_ignore_metadata(mut self, ignore_metadata: bool) -> Self {
        self.ignore_metadata = ignore_metadata;
        self
    }
}

/// Diffs two key sets.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use arbaudit::key_diff::diff_key_sets;
///
/// let reference: BTreeSet<&str> = ["a", "b", "c"].into();
/// let comparison: BTreeSet<&str> = ["a", "b", "d"].into();
/// let (missing, extra) = diff_key_sets(&reference, &comparison);
/// assert_eq!(missing, ["c"]);
/// assert_eq!(extra, ["d"]);
/// ```
pub fn diff_key_sets<S>(
    reference: &BTreeSet<S>,
    comparison: &BTreeSet<S>,
) -> (Vec<String>, Vec<String>)
where
    S: Ord + AsRef<str>,
{
    // BTreeSet differences iterate in order, so both sides come out sorted.
    let missing = reference
        .difference(comparison)
        .map(|k| k.as_ref().to_string())
        .collect();
    let extra = comparison
        .difference(reference)
        .map(|k| k.as_ref().to_string())
        .collect();
    (missing, extra)
}

/// Builds the report for one comparison file.
pub fn diff_locale_files(
    reference: &LocaleFile,
    comparison: &LocaleFile,
    ignore_metadata: bool,
) -> DiffReport {
    let (missing, extra) = diff_key_sets(
        &reference.key_set(ignore_metadata),
        &comparison.key_set(ignore_metadata),
    );
    DiffReport {
        file: comparison.name.clone(),
        language: comparison.language.clone(),
        missing,
        extra,
    }
}

/// Lists the `.arb` files of `dir` other than `reference`, sorted by name.
pub fn discover_comparisons(dir: &Path, reference: &str) -> Result<Vec<String>, Error> {
    // The directory is matched literally; only the file name is a wildcard.
    let literal_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&literal_dir).join(format!("*.{}", ARB_EXTENSION));

    let mut names = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry.map_err(|e| Error::Io(e.into_error()))?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) {
            if name != reference {
                names.push(name);
            }
        }
    }
    names.sort();
    tracing::debug!(dir = %dir.display(), found = names.len(), "discovered locale files");
    Ok(names)
}

/// Reads the reference and every comparison file, then diffs each one.
///
/// The first unreadable or malformed file aborts the run.
pub fn run_key_diff(opts: &KeyDiffOptions) -> Result<KeyDiffRun, Error> {
    let reference = LocaleFile::read_from(opts.dir.join(&opts.reference))?;

    let names = match &opts.comparisons {
        Comparisons::Named(names) => names.clone(),
        Comparisons::Discover => discover_comparisons(&opts.dir, &opts.reference)?,
    };

    let mut files = Vec::with_capacity(names.len());
    for name in &names {
        let comparison = LocaleFile::read_from(opts.dir.join(name))?;
        let report = diff_locale_files(&reference, &comparison, opts.ignore_metadata);
        tracing::debug!(
            file = %report.file,
            path = %comparison.path.display(),
            missing = report.missing.len(),
            extra = report.extra.len(),
            "diffed locale file"
        );
        files.push(report);
    }

    let run = KeyDiffRun {
        reference: reference.name,
        files,
    };
    tracing::info!(
        reference = %run.reference,
        files = run.files.len(),
        missing = run.total_missing(),
        extra = run.total_extra(),
        "key diff finished"
    );
    Ok(run)
}

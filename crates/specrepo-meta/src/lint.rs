//! Structural linting of spec repositories
//!
//! The repository manager depends only on the [`Linter`] trait. [`SpecLinter`]
//! is the built-in implementation: it checks that each spec file decodes,
//! declares its required fields and sits at the conventional path.

use std::fmt;

use serde::Serialize;
use specrepo_fs::{ConfigStore, NormalizedPath, io};

use crate::error::Result;
use crate::spec::{SPEC_SUFFIXES, SpecMetadata, is_spec_file};
use crate::version::ToolVersion;

/// Capability to validate a directory of spec files.
pub trait Linter {
    /// Lint every spec found below `dir`.
    ///
    /// Problems with the specs end up in the report; `Err` is reserved for
    /// failures to read the directory itself.
    fn lint(&self, dir: &NormalizedPath) -> Result<LintReport>;
}

/// Severity of a lint issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    Error,
    Warning,
}

impl fmt::Display for LintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR"),
            Self::Warning => f.write_str("WARN"),
        }
    }
}

/// A single problem found in a spec file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    pub level: LintLevel,
    /// Spec file path relative to the linted directory
    pub path: String,
    pub message: String,
}

impl LintIssue {
    fn error(path: &str, message: impl Into<String>) -> Self {
        Self {
            level: LintLevel::Error,
            path: path.to_string(),
            message: message.into(),
        }
    }

    fn warning(path: &str, message: impl Into<String>) -> Self {
        Self {
            level: LintLevel::Warning,
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} | {}", self.path, self.level, self.message)
    }
}

/// Outcome of linting one directory
#[derive(Debug, Clone)]
pub struct LintReport {
    pub root: NormalizedPath,
    /// Number of spec files examined
    pub specs_checked: usize,
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            specs_checked: 0,
            issues: Vec::new(),
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &LintIssue> {
        self.issues.iter().filter(|i| i.level == LintLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LintIssue> {
        self.issues.iter().filter(|i| i.level == LintLevel::Warning)
    }

    /// Whether the report passes. Warnings only count when `only_errors` is false.
    pub fn passes(&self, only_errors: bool) -> bool {
        if only_errors {
            self.errors().next().is_none()
        } else {
            self.issues.is_empty()
        }
    }

    /// Issues that make the report fail under the given mode.
    pub fn failing_issues(&self, only_errors: bool) -> Vec<&LintIssue> {
        self.issues
            .iter()
            .filter(|i| !only_errors || i.level == LintLevel::Error)
            .collect()
    }
}

/// Built-in structural linter.
#[derive(Debug, Clone)]
pub struct SpecLinter {
    store: ConfigStore,
    max_summary_len: usize,
}

impl SpecLinter {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
            max_summary_len: 140,
        }
    }

    /// Check one decoded spec located at `relative` (below the linted root).
    pub fn check_spec(&self, spec: &SpecMetadata, relative: &str) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        let name = present(&spec.name);
        let version = present(&spec.version);
        let summary = present(&spec.summary);

        if name.is_none() {
            issues.push(LintIssue::error(relative, "Missing name"));
        }

        match version {
            None => issues.push(LintIssue::error(relative, "Missing version")),
            Some(v) if ToolVersion::parse(v).is_err() => {
                issues.push(LintIssue::error(relative, format!("Invalid version `{v}`")));
            }
            Some(_) => {}
        }

        if summary.is_none() {
            issues.push(LintIssue::error(relative, "Missing summary"));
        }

        if present(&spec.homepage).is_none() {
            issues.push(LintIssue::error(relative, "Missing homepage"));
        }

        if spec.license.as_ref().and_then(|l| l.kind()).is_none() {
            issues.push(LintIssue::error(relative, "Missing license type"));
        }

        if spec.source.as_ref().is_none_or(|s| s.is_empty()) {
            issues.push(LintIssue::error(relative, "Missing source"));
        }

        if let (Some(name), Some(version)) = (name, version)
            && let Some(expected) = expected_path(relative, name, version)
        {
            issues.push(LintIssue::error(
                relative,
                format!("Incorrect path, expected `{expected}`"),
            ));
        }

        if let Some(summary) = summary {
            if summary.chars().count() > self.max_summary_len {
                issues.push(LintIssue::warning(relative, "Summary too long"));
            }
            if present(&spec.description) == Some(summary) {
                issues.push(LintIssue::warning(relative, "Description equals summary"));
            }
        }

        issues
    }
}

impl Default for SpecLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter for SpecLinter {
    fn lint(&self, dir: &NormalizedPath) -> Result<LintReport> {
        let mut files = Vec::new();
        collect_spec_files(dir, &mut files)?;
        files.sort();

        let mut report = LintReport::new(dir.clone());
        for file in files {
            let relative = file.relative_to(dir).unwrap_or_else(|| file.to_string());
            report.specs_checked += 1;

            match self.store.load::<SpecMetadata>(&file) {
                Ok(spec) => report.issues.extend(self.check_spec(&spec, &relative)),
                Err(e) => {
                    tracing::debug!(file = %file, error = %e, "Spec failed to decode");
                    report
                        .issues
                        .push(LintIssue::error(&relative, format!("Unable to decode spec: {e}")));
                }
            }
        }

        tracing::debug!(
            root = %dir,
            specs = report.specs_checked,
            issues = report.issues.len(),
            "Linted directory"
        );
        Ok(report)
    }
}

/// Recursively gather spec files. Hidden directories such as `.git` are skipped.
fn collect_spec_files(dir: &NormalizedPath, out: &mut Vec<NormalizedPath>) -> Result<()> {
    for file in io::list_files(dir)? {
        if is_spec_file(&file) {
            out.push(dir.join(&file));
        }
    }
    for sub in io::list_subdirectories(dir)? {
        collect_spec_files(&dir.join(&sub), out)?;
    }
    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Expected location when `relative` is not `<name>/<version>/<name><suffix>`.
fn expected_path(relative: &str, name: &str, version: &str) -> Option<String> {
    let components: Vec<&str> = relative.split('/').collect();
    let file = components.last().copied().unwrap_or_default();
    let suffix = SPEC_SUFFIXES
        .iter()
        .find(|suffix| file.ends_with(*suffix))
        .copied()
        .unwrap_or(SPEC_SUFFIXES[0]);

    let expected = format!("{name}/{version}/{name}{suffix}");
    if relative == expected {
        None
    } else {
        Some(expected)
    }
}

//! Workflow checking driver.
//!
//! This module handles:
//! - Discovering workflow files in the configured directory
//! - Reading, parsing and validating each file
//! - Turning per-file failures into reports instead of aborting the run
//! - Aggregating the overall pass/fail status

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::parser;
use crate::report;
use crate::validation::{validate_document, ValidationResult};

/// Failure to check a single workflow file
#[derive(Debug)]
pub enum CheckError {
    /// The file could not be read
    Io(io::Error),
    /// The file is not valid YAML
    Parse(serde_yaml::Error),
    /// Valid YAML, but not shaped like a workflow
    Structure(serde_yaml::Error),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Io(e) => write!(f, "{}", e),
            CheckError::Parse(e) => write!(f, "{}", e),
            CheckError::Structure(e) => write!(f, "unexpected workflow structure: {}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Io(e) => Some(e),
            CheckError::Parse(e) | CheckError::Structure(e) => Some(e),
        }
    }
}

/// What happened to one file
#[derive(Debug)]
pub enum FileOutcome {
    Checked(ValidationResult),
    Failed(CheckError),
}

/// Outcome of checking one workflow file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Parsed and free of issues; warnings are allowed
    pub fn is_valid(&self) -> bool {
        match &self.outcome {
            FileOutcome::Checked(result) => result.is_valid(),
            FileOutcome::Failed(_) => false,
        }
    }
}

/// Overall status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every discovered file parsed and had no issues
    Passed,
    /// Missing directory, or at least one invalid file
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Passed => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

/// Check workflow text that has already been read
pub fn check_text(text: &str) -> FileOutcome {
    match parser::parse_document(text) {
        Ok(doc) => FileOutcome::Checked(validate_document(&doc)),
        Err(e) => FileOutcome::Failed(e),
    }
}

/// Read and check a single workflow file
pub fn check_file(path: &Path) -> FileReport {
    let outcome = match fs::read_to_string(path) {
        Ok(text) => check_text(&text),
        Err(e) => FileOutcome::Failed(CheckError::Io(e)),
    };

    match &outcome {
        FileOutcome::Checked(result) => log::debug!(
            "Checked {:?}: {} issue(s), {} warning(s)",
            path,
            result.issues().count(),
            result.warnings().count()
        ),
        FileOutcome::Failed(e) => log::debug!("Failed to check {:?}: {}", path, e),
    }

    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

/// List workflow files directly under `dir`
///
/// Every entry whose name ends in one of the extensions is listed, dotfiles
/// and directories included; a directory then fails to read in `check_file`.
/// Entries are grouped by extension in the given order and sorted by name
/// within a group.
pub fn discover_workflows(dir: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => candidates.push(entry.path()),
            Err(e) => log::warn!("Skipping unreadable entry in {:?}: {}", dir, e),
        }
    }

    candidates.sort();

    let mut workflows = Vec::with_capacity(candidates.len());
    for ext in extensions {
        workflows.extend(
            candidates
                .iter()
                .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(ext.as_str()))
                .cloned(),
        );
    }

    log::debug!("Discovered {} workflow file(s) in {:?}", workflows.len(), dir);
    Ok(workflows)
}

/// Check every workflow file and write the report to `out`
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunStatus> {
    let dir = &config.workflows_dir;
    if !dir.is_dir() {
        report::write_missing_dir(out, dir).context("Failed to write report")?;
        return Ok(RunStatus::Failed);
    }

    let workflows = discover_workflows(dir, &config.extensions)
        .with_context(|| format!("Failed to read workflow directory {:?}", dir))?;

    let mut all_valid = true;
    for path in workflows {
        let file_report = check_file(&path);
        report::write_file_report(out, &file_report).context("Failed to write report")?;
        all_valid &= file_report.is_valid();
    }

    report::write_banner(out, all_valid).context("Failed to write report")?;

    Ok(if all_valid {
        RunStatus::Passed
    } else {
        RunStatus::Failed
    })
}

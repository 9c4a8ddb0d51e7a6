//! Human-readable report output.

use std::io::{self, Write};
use std::path::Path;

use crate::check::{CheckError, FileOutcome, FileReport};
use crate::validation::ValidationResult;

const BANNER_WIDTH: usize = 40;

/// Write the section for one checked file
pub fn write_file_report<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    writeln!(out, "\nChecking: {}", report.path.display())?;

    match &report.outcome {
        FileOutcome::Checked(result) => {
            writeln!(out, "✓ Valid YAML syntax")?;
            write_findings(out, result)
        }
        FileOutcome::Failed(CheckError::Parse(e)) => {
            writeln!(out, "❌ YAML parsing error: {}", e)
        }
        FileOutcome::Failed(e @ CheckError::Structure(_)) => {
            // The text parsed; only its shape was wrong
            writeln!(out, "✓ Valid YAML syntax")?;
            writeln!(out, "❌ Error: {}", e)
        }
        FileOutcome::Failed(e @ CheckError::Io(_)) => writeln!(out, "❌ Error: {}", e),
    }
}

fn write_findings<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    for job in &result.jobs {
        writeln!(out, "  Job: {}", job)?;
    }

    let mut issues = result.issues().peekable();
    if issues.peek().is_some() {
        writeln!(out, "\n❌ Issues found:")?;
        for issue in issues {
            writeln!(out, "  - {}", issue)?;
        }
    }

    let mut warnings = result.warnings().peekable();
    if warnings.peek().is_some() {
        writeln!(out, "\n⚠️  Warnings:")?;
        for warning in warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }

    if result.diagnostics.is_empty() {
        writeln!(out, "✓ No issues found")?;
    }

    Ok(())
}

/// Write the final aggregate banner
pub fn write_banner<W: Write>(out: &mut W, all_valid: bool) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
    if all_valid {
        writeln!(out, "✅ All workflows are valid")
    } else {
        writeln!(out, "❌ Some workflows have issues")
    }
}

pub fn write_missing_dir<W: Write>(out: &mut W, dir: &Path) -> io::Result<()> {
    writeln!(out, "No {} directory found", dir.display())
}

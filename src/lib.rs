//! Workflow Checker
//!
//! Structural checks for GitHub Actions workflow files.
//!
//! This library provides:
//! - Typed workflow documents that tolerate unknown keys
//! - Parsing that separates YAML syntax errors from shape errors
//! - Validation rules producing issues and warnings
//! - Directory scanning and report output

pub mod check;
pub mod config;
pub mod parser;
pub mod report;
pub mod validation;
pub mod workflow;

// Re-exports for clean public API
pub use check::{check_file, check_text, run, CheckError, FileOutcome, FileReport, RunStatus};
pub use config::Config;
pub use parser::parse_document;
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
pub use workflow::WorkflowDocument;

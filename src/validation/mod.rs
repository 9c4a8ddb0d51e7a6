//! Validation Engine
//!
//! Clean separation of validation rules from parsing and reporting.

pub mod engine;

pub use engine::{validate_document, validate_job, Diagnostic, Severity};

// Re-export common types
pub use engine::ValidationResult;

//! Validation Engine
//!
//! Structural rules applied to a parsed workflow, kept apart from file
//! handling and output formatting.

use crate::workflow::{Job, WorkflowDocument};

/// Action versions considered outdated when found in a step's `uses`
const OLD_ACTION_VERSIONS: [&str; 3] = ["@v3", "@v2", "@v1"];

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking issue, makes the document invalid
    Error,
    /// Advisory only
    Warning,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// Result of validating one workflow document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Job names in document order
    pub jobs: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            message,
            severity: Severity::Warning,
        });
    }

    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Warning)
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| d.message.as_str())
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Validate an entire workflow document
pub fn validate_document(doc: &WorkflowDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    match &doc.jobs {
        Some(jobs) => {
            for (name, job) in jobs {
                result.jobs.push(name.clone());
                validate_job(name, job, &mut result);
            }
        }
        None => result.add_error("No jobs defined".to_string()),
    }

    if !doc.has_triggers() {
        result.add_error("No triggers defined".to_string());
    }

    result
}

/// Validate a single job and its steps
pub fn validate_job(name: &str, job: &Job, result: &mut ValidationResult) {
    match &job.steps {
        Some(steps) => {
            for (index, step) in steps.iter().enumerate() {
                if let Some(action) = &step.uses {
                    if is_old_action_version(action) {
                        result.add_warning(format!(
                            "Step {} in job '{}' uses old action version: {}",
                            index, name, action
                        ));
                    }
                }

                if !step.is_identified() {
                    result.add_error(format!(
                        "Step {} in job '{}' has no name, uses, or run",
                        index, name
                    ));
                }
            }
        }
        None => result.add_error(format!("Job '{}' has no steps", name)),
    }

    // Heuristic: any job whose name mentions a release probably publishes something
    if name.to_lowercase().contains("release") && !job.has_permissions() {
        result.add_warning(format!(
            "Job '{}' may need 'permissions: contents: write'",
            name
        ));
    }
}

/// Substring match, so `@v10` also counts
pub fn is_old_action_version(action: &str) -> bool {
    OLD_ACTION_VERSIONS
        .iter()
        .any(|version| action.contains(version))
}

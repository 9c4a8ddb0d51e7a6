//! Workflow Parser
//!
//! Two stages: YAML syntax first, then the typed workflow shape. Keeping
//! them apart lets a broken file be told apart from a well-formed file with
//! the wrong structure.

use serde::de::Error as _;
use serde_yaml::Value;

use crate::check::CheckError;
use crate::workflow::WorkflowDocument;

/// Parse YAML text into a generic value tree
pub fn parse_yaml(text: &str) -> Result<Value, CheckError> {
    serde_yaml::from_str(text).map_err(CheckError::Parse)
}

/// Convert a generic value tree into a typed workflow document
pub fn to_workflow(mut value: Value) -> Result<WorkflowDocument, CheckError> {
    if !value.is_mapping() {
        return Err(CheckError::Structure(serde_yaml::Error::custom(
            "workflow root must be a mapping",
        )));
    }
    // Resolve `<<: *anchor` merge keys before looking for known fields
    value.apply_merge().map_err(CheckError::Structure)?;
    serde_yaml::from_value(value).map_err(CheckError::Structure)
}

/// Parse workflow text into a typed document
///
/// This is the main entry point for parsing.
pub fn parse_document(text: &str) -> Result<WorkflowDocument, CheckError> {
    to_workflow(parse_yaml(text)?)
}

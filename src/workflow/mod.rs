//! Workflow Model
//!
//! Typed workflow documents with tolerant handling of unknown keys.

pub mod schema;

pub use schema::{Job, Step, WorkflowDocument};

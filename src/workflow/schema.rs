//! Workflow Schema Types
//!
//! Typed view of a workflow file. Only the keys the checker looks at are
//! modeled; everything else lands in an `extra` mapping so valid files with
//! unmodeled fields still load.
//!
//! Keys of modeled mappings must be strings: a bool or number key such as
//! `true:` fails field matching and the file is rejected as misshapen.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

/// Root workflow document
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorkflowDocument {
    /// Trigger definition; `Some` whenever the key exists, even if null
    #[serde(default, deserialize_with = "present")]
    pub on: Option<Value>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub jobs: Option<IndexMap<String, Job>>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A job under `jobs`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Job {
    #[serde(default, deserialize_with = "present_non_null")]
    pub steps: Option<Vec<Step>>,
    #[serde(default, deserialize_with = "present")]
    pub permissions: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A single step of a job
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Step {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub uses: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub run: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl WorkflowDocument {
    pub fn has_triggers(&self) -> bool {
        self.on.is_some()
    }
}

impl Job {
    pub fn has_permissions(&self) -> bool {
        self.permissions.is_some()
    }
}

impl Step {
    /// True when the step names an action, a command, or at least a label
    pub fn is_identified(&self) -> bool {
        self.name.is_some() || self.uses.is_some() || self.run.is_some()
    }
}

/// Only called by serde when the key exists, so a null value still maps to `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Like `present`, but a null value is an error instead of an empty collection.
fn present_non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Err(D::Error::custom("expected a value, found null"));
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

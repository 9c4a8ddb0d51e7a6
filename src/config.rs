//! Configuration management for the workflow checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Workflow directory and file extension settings

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Directory scanned for workflow files, relative to the working directory
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";

/// Extensions of workflow files, in scan order
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Command-line arguments for the workflow checker
///
/// The checker takes no options; clap still provides `--help` and
/// `--version` and rejects anything else.
#[derive(Debug, Parser)]
#[command(name = "workflow-check")]
#[command(about = "Check GitHub Actions workflow files for common issues")]
#[command(version)]
pub struct Args {}

/// Settings for one checker run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the workflow files
    pub workflows_dir: PathBuf,
    /// File extensions to pick up, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_workflows_dir(DEFAULT_WORKFLOWS_DIR)
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let Args {} = args;
        Ok(Self::default())
    }

    /// Default settings pointed at another directory
    pub fn with_workflows_dir(dir: impl AsRef<Path>) -> Self {
        Config {
            workflows_dir: dir.as_ref().to_path_buf(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

//! Error types for ut2u
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// INI parsing errors
#[derive(Error, Debug)]
pub enum IniError {
    /// Section header without a closing bracket
    #[error("Line {line}: section header is missing a closing ']'")]
    UnterminatedSection { line: usize },

    /// Line that is neither a header nor a key/value pair
    #[error("Line {line}: expected 'key=value', got '{content}'")]
    MissingSeparator { line: usize, content: String },

    /// Key/value pair with nothing before the '='
    #[error("Line {line}: key cannot be empty")]
    EmptyKey { line: usize },

    /// Failed to read the input
    #[error("Failed to read INI data: {0}")]
    Io(#[from] std::io::Error),
}

/// Build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Root does not look like a UT2004 installation
    #[error("Invalid root: {path} (expected System/UCC.exe)")]
    InvalidRoot { path: PathBuf },

    /// Package or dependency name that is not a single path component
    #[error("Invalid package name '{name}'")]
    InvalidName { name: String },

    /// Package path is missing or not a directory
    #[error("Invalid package: {path} is not a directory")]
    InvalidPackage { path: PathBuf },

    /// Compiled dependency missing from the system directory
    #[error("Dependency '{name}' not found at {path}")]
    DependencyNotFound { name: String, path: PathBuf },

    /// Failed to create the build directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write the generated configuration
    #[error("Failed to write config '{path}': {error}")]
    WriteConfig { path: PathBuf, error: String },

    /// Failed to remove a stale artifact
    #[error("Failed to remove artifact '{path}': {error}")]
    RemoveArtifact { path: PathBuf, error: String },

    /// Compiler could not be started or waited on
    #[error("Failed to run compiler '{path}': {error}")]
    Spawn { path: PathBuf, error: String },

    /// Compiler exited unsuccessfully
    #[error("Compiler failed: {status}")]
    CompilerFailed { status: ExitStatus },

    /// Build interrupted before completion
    #[error("Build cancelled")]
    Cancelled,
}

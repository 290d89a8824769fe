//! Error types and handling for sitesetup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration and settings errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sitesetup operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(sitesetup::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(sitesetup::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(sitesetup::fs::write_failed),
        help("Check that you have permission to write to this location")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sitesetup::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(sitesetup::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(sitesetup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration in {path}: {message}")]
    #[diagnostic(code(sitesetup::config::invalid))]
    ConfigInvalid { path: String, message: String },

    #[error("Invalid settings: {message}")]
    #[diagnostic(
        code(sitesetup::config::settings_invalid),
        help("See sitesetup.yaml in the project root")
    )]
    SettingsInvalid { message: String },

    // Operator interaction errors
    #[error("Failed to read answer: {message}")]
    #[diagnostic(code(sitesetup::prompt::failed))]
    PromptFailed { message: String },

    // Shell errors
    #[error("Failed to run '{command}': {reason}")]
    #[diagnostic(
        code(sitesetup::shell::execution_failed),
        help("Check that the package manager is installed and on your PATH")
    )]
    ShellExecutionFailed { command: String, reason: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SetupError {
    fn from(err: serde_yaml::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SetupError {
    fn from(err: inquire::InquireError) -> Self {
        SetupError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;

//! Configuration errors

use std::path::Path;

use super::SetupError;

/// Creates a config not found error
pub fn not_found(path: &Path) -> SetupError {
    SetupError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl AsRef<Path>, reason: impl ToString) -> SetupError {
    SetupError::ConfigParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error for a document whose shape is unexpected
pub fn invalid(path: impl AsRef<Path>, message: impl Into<String>) -> SetupError {
    SetupError::ConfigInvalid {
        path: path.as_ref().display().to_string(),
        message: message.into(),
    }
}

/// Creates an invalid settings error
pub fn settings_invalid(message: impl Into<String>) -> SetupError {
    SetupError::SettingsInvalid {
        message: message.into(),
    }
}

//! File system errors

use std::path::Path;

use super::SetupError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> SetupError {
    SetupError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> SetupError {
    SetupError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> SetupError {
    SetupError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

//! Environment detection
//!
//! Looks for the environment file (`_ss_environment.php` by default) in the
//! start directory and each of its parents, and reads the declared
//! environment type from the first one found. Anything other than the
//! configured development type, including no file at all, counts as a
//! non-development environment.

pub mod source;

use std::path::{Path, PathBuf};

pub use source::{EnvironmentSource, PhpDefineSource};

use crate::config::settings::EnvironmentSettings;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    Development,
    NonDevelopment,
}

/// Result of an environment probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedEnvironment {
    pub kind: EnvironmentKind,
    /// Declared environment type, e.g. `dev` or `live`
    pub label: Option<String>,
    /// The environment file the label was read from
    pub file: Option<PathBuf>,
}

impl DetectedEnvironment {
    fn undeclared(file: Option<PathBuf>) -> Self {
        Self {
            kind: EnvironmentKind::NonDevelopment,
            label: None,
            file,
        }
    }

    pub fn is_development(&self) -> bool {
        self.kind == EnvironmentKind::Development
    }

    /// Label for messages, `live` when nothing was declared
    pub fn describe(&self) -> &str {
        self.label.as_deref().unwrap_or("live")
    }
}

/// Search upwards from `start` for the environment file.
///
/// Stops at the filesystem root or at the first directory that cannot be
/// read.
pub fn find_environment_file(start: &Path, file_name: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if std::fs::read_dir(dir).is_err() {
            log::debug!("{} is not readable, giving up", dir.display());
            break;
        }

        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

/// Determine the environment type for a project
pub fn detect_environment_type(
    start: &Path,
    settings: &EnvironmentSettings,
    source: &dyn EnvironmentSource,
) -> Result<DetectedEnvironment> {
    let Some(file) = find_environment_file(start, &settings.file) else {
        log::debug!("no {} found above {}", settings.file, start.display());
        return Ok(DetectedEnvironment::undeclared(None));
    };

    log::debug!("reading environment type from {}", file.display());
    let Some(label) = source.read_type(&file, &settings.constant)? else {
        log::debug!("{} does not define {}", file.display(), settings.constant);
        return Ok(DetectedEnvironment::undeclared(Some(file)));
    };

    let kind = if label == settings.development {
        EnvironmentKind::Development
    } else {
        EnvironmentKind::NonDevelopment
    };

    Ok(DetectedEnvironment {
        kind,
        label: Some(label),
        file: Some(file),
    })
}

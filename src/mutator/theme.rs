//! Renaming the scaffold's `themes/default` directory

use std::fmt;
use std::path::PathBuf;

use crate::project::Project;

/// What happened to the default theme directory.
///
/// Only `Renamed` means the directory moved; every other outcome is
/// reported and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed(PathBuf),
    SourceMissing,
    DestinationExists(PathBuf),
    Failed(String),
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed(to) => write!(f, "renamed to {}", to.display()),
            RenameOutcome::SourceMissing => write!(f, "no default theme to rename"),
            RenameOutcome::DestinationExists(to) => write!(f, "{} already exists", to.display()),
            RenameOutcome::Failed(reason) => write!(f, "rename failed: {reason}"),
        }
    }
}

pub fn rename_default_theme(project: &Project, theme: &str) -> RenameOutcome {
    let from = project.default_theme_dir();
    let to = project.theme_dir(theme);

    if !from.is_dir() {
        return RenameOutcome::SourceMissing;
    }
    if to.exists() {
        return RenameOutcome::DestinationExists(to);
    }

    match std::fs::rename(&from, &to) {
        Ok(()) => RenameOutcome::Renamed(to),
        Err(e) => RenameOutcome::Failed(e.to_string()),
    }
}

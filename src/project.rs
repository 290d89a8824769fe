//! Conventional SilverStripe project layout
//!
//! All paths are relative to the project base path, which is resolved once
//! by the command layer and passed down explicitly.

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Theme directory shipped by the scaffold, renamed on first install
pub const DEFAULT_THEME_DIR: &str = "themes/default";
/// Parent of all theme directories
pub const THEMES_DIR: &str = "themes";
/// Front-end package manifest
pub const PACKAGE_MANIFEST: &str = "package.json";
/// SilverStripe site config (theme and database)
pub const VIEWER_CONFIG: &str = "mysite/_config/config.yml";
/// SilverStripe logging config
pub const LOGGING_CONFIG: &str = "mysite/_config/logging.yml";
/// Scaffold readme, removed once the project is configured
pub const README: &str = "README.md";

/// A project rooted at an absolute base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Resolve the project root, defaulting to the current directory.
    ///
    /// The path is canonicalised so the vhost `DocumentRoot` is absolute.
    pub fn resolve(workspace: Option<&Path>) -> Result<Self> {
        let candidate = match workspace {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };

        let root = dunce::canonicalize(&candidate).map_err(|_| error::fs::not_found(&candidate))?;
        if !root.is_dir() {
            return Err(error::fs::not_found(&root));
        }

        Ok(Self { root })
    }

    /// Wrap an already resolved root without touching the file system
    #[cfg(test)]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn default_theme_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_THEME_DIR)
    }

    pub fn theme_dir(&self, theme: &str) -> PathBuf {
        self.root.join(THEMES_DIR).join(theme)
    }

    pub fn package_manifest(&self) -> PathBuf {
        self.root.join(PACKAGE_MANIFEST)
    }

    pub fn viewer_config(&self) -> PathBuf {
        self.root.join(VIEWER_CONFIG)
    }

    pub fn logging_config(&self) -> PathBuf {
        self.root.join(LOGGING_CONFIG)
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join(README)
    }

    /// Whether the scaffold's default theme is still in place
    pub fn needs_theme_setup(&self) -> bool {
        self.default_theme_dir().exists()
    }

    /// Remove the scaffold readme if present. Returns whether a file was removed.
    pub fn remove_readme(&self) -> Result<bool> {
        let readme = self.readme();
        if !readme.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&readme).map_err(|e| error::fs::write_failed(&readme, e))?;
        Ok(true)
    }
}

//! Applying operator answers to a scaffolded project
//!
//! The steps run in a fixed order and each is guarded on its own:
//! 1. rename `themes/default` to `themes/<theme>` (failures ignored)
//! 2. update `package.json`
//! 3. update `mysite/_config/config.yml`
//! 4. update `mysite/_config/logging.yml`
//!
//! Missing documents are skipped. Parse and write errors abort the
//! remaining steps; nothing already written is rolled back.

pub mod logging;
pub mod manifest;
pub mod theme;
pub mod viewer;
pub mod yaml;

use std::path::Path;

pub use theme::RenameOutcome;

use crate::config::InstallConfig;
use crate::error::{self, Result};
use crate::project::Project;

/// What `apply_configuration` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub rename: RenameOutcome,
    pub manifest_updated: bool,
    pub viewer_updated: bool,
    pub logging_updated: bool,
}

pub fn apply_configuration(project: &Project, config: &InstallConfig) -> Result<MutationReport> {
    if !project.root().is_dir() {
        return Err(error::fs::not_found(project.root()));
    }

    let rename = theme::rename_default_theme(project, &config.theme);
    match &rename {
        RenameOutcome::Renamed(_) => log::info!("theme directory {rename}"),
        other => log::warn!("skipping theme rename: {other}"),
    }

    let manifest_updated = update_if_present(&project.package_manifest(), |path| {
        manifest::update_manifest(path, config)
    })?;
    let viewer_updated = update_if_present(&project.viewer_config(), |path| {
        viewer::update_viewer_config(path, config)
    })?;
    let logging_updated = update_if_present(&project.logging_config(), |path| {
        logging::update_logging_config(path, config)
    })?;

    Ok(MutationReport {
        rename,
        manifest_updated,
        viewer_updated,
        logging_updated,
    })
}

fn update_if_present<F>(path: &Path, update: F) -> Result<bool>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if !path.exists() {
        log::debug!("{} not found, skipping", path.display());
        return Ok(false);
    }

    update(path)?;
    log::info!("updated {}", path.display());
    Ok(true)
}

//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cli::GateArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::project::Project;

/// Resolve the project and its settings, applying command-line overrides
pub fn resolve_project(
    workspace: Option<&Path>,
    config: Option<&Path>,
    gate: &GateArgs,
    vhost_dir: Option<PathBuf>,
) -> Result<(Project, Settings)> {
    let project = Project::resolve(workspace)?;
    let mut settings = Settings::load(project.root(), config)?;

    if gate.skip_env_check {
        settings.gate.check_environment = false;
    }
    if let Some(dir) = vhost_dir {
        settings.vhost.directory = dir;
    }

    log::debug!("project root: {}", project.root().display());
    Ok((project, settings))
}

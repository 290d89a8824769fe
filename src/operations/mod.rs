//! Lifecycle hook operations
//!
//! - [`install`]: the "on install" hook (theme, vhost, package manager)
//! - [`update`]: the "on update" hook (package manager only)
//!
//! Both are gated by [`gate::check`]: outside a development environment
//! they return [`Outcome::Skipped`] without touching anything.

pub mod display;
pub mod gate;
pub mod install;
pub mod update;

use std::path::PathBuf;

use crate::config::Settings;
use crate::environment::EnvironmentSource;
use crate::error::Result;
use crate::mutator::MutationReport;
use crate::project::Project;
use crate::shell::{ShellOutput, ShellRunner};

pub use gate::SkipReason;

/// Everything an operation needs, resolved once by the command layer
pub struct SetupContext<'a> {
    pub project: Project,
    pub settings: Settings,
    pub environment_source: &'a dyn EnvironmentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Completed(Summary),
}

/// What a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub theme: Option<MutationReport>,
    pub readme_removed: bool,
    pub vhost: Option<PathBuf>,
    pub package_manager: Option<ShellOutput>,
}

/// Run the package manager in the project root if it has a `package.json`
fn install_dependencies(
    ctx: &SetupContext<'_>,
    shell: &mut dyn ShellRunner,
) -> Result<Option<ShellOutput>> {
    if !ctx.project.package_manifest().exists() {
        log::debug!("no package.json, skipping package manager");
        return Ok(None);
    }

    let package_manager = &ctx.settings.package_manager;
    display::print_step(&format!("Running {}", package_manager.command_line()));
    let output = shell.run(
        &package_manager.program,
        &package_manager.args,
        ctx.project.root(),
    )?;
    Ok(Some(output))
}

//! Post-install command implementation
//!
//! Resolves the project once, then hands over to
//! [`operations::install::on_install_event`] with the real prompt and shell
//! collaborators.

use std::path::Path;

use crate::cli::PostInstallArgs;
use crate::environment::PhpDefineSource;
use crate::error::Result;
use crate::operations::{self, SetupContext};
use crate::prompt;
use crate::shell::SystemShell;

use super::helpers::resolve_project;

pub fn run(workspace: Option<&Path>, config: Option<&Path>, args: PostInstallArgs) -> Result<()> {
    let (project, settings) = resolve_project(workspace, config, &args.gate, args.vhost_dir)?;
    let ctx = SetupContext {
        project,
        settings,
        environment_source: &PhpDefineSource,
    };

    let mut prompts = prompt::for_stdin();
    operations::install::on_install_event(&ctx, prompts.as_mut(), &mut SystemShell::stdout())?;
    Ok(())
}

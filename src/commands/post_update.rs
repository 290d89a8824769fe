//! Post-update command implementation

use std::path::Path;

use crate::cli::PostUpdateArgs;
use crate::environment::PhpDefineSource;
use crate::error::Result;
use crate::operations::{self, SetupContext};
use crate::shell::SystemShell;

use super::helpers::resolve_project;

pub fn run(workspace: Option<&Path>, config: Option<&Path>, args: &PostUpdateArgs) -> Result<()> {
    let (project, settings) = resolve_project(workspace, config, &args.gate, None)?;
    let ctx = SetupContext {
        project,
        settings,
        environment_source: &PhpDefineSource,
    };

    operations::update::on_update_event(&ctx, &mut SystemShell::stdout())?;
    Ok(())
}

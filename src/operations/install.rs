//! The "on install" hook
//!
//! 1. Gate on the environment (and optional path marker)
//! 2. If `themes/default` is still there, ask for the theme name. A blank
//!    answer skips theme setup; otherwise ask for description and database
//!    details, apply them and remove the scaffold readme
//! 3. Offer to write a vhost
//! 4. Run the package manager if the project has a `package.json`
//!
//! Steps run strictly in order and the first error aborts the rest.

use super::{Outcome, SetupContext, Summary, display, gate, install_dependencies};
use crate::config::InstallConfig;
use crate::error::Result;
use crate::mutator::{self, MutationReport};
use crate::prompt::PromptSource;
use crate::shell::ShellRunner;
use crate::vhost;

pub const THEME_PROMPT: &str = "Please specify the theme name:";
pub const DESCRIPTION_PROMPT: &str = "Please specify the project description:";
pub const SQL_HOST_PROMPT: &str = "Please specify the database host:";
pub const SQL_NAME_PROMPT: &str = "Please specify the database name:";
pub const VHOST_PROMPT: &str = "Would you like to set up a vhost? (y/n):";
pub const HOST_NAME_PROMPT: &str = "Please specify the host name (excluding '.dev'):";

pub fn on_install_event(
    ctx: &SetupContext<'_>,
    prompts: &mut dyn PromptSource,
    shell: &mut dyn ShellRunner,
) -> Result<Outcome> {
    if let Some(reason) = gate::check(ctx)? {
        log::info!("skipping install hook: {reason}");
        return Ok(Outcome::Skipped(reason));
    }

    let mut summary = Summary::default();

    if ctx.project.needs_theme_setup() {
        if let Some(report) = setup_theme(ctx, prompts)? {
            summary.readme_removed = ctx.project.remove_readme()?;
            summary.theme = Some(report);
        }
    } else {
        log::debug!("themes/default is gone, theme setup already done");
    }

    if prompts.confirm(VHOST_PROMPT)? {
        match prompts.ask(HOST_NAME_PROMPT)? {
            Some(host_name) => {
                let path = vhost::write_vhost(ctx.project.root(), &host_name, &ctx.settings.vhost)?;
                display::print_step(&format!("Wrote vhost {}", path.display()));
                summary.vhost = Some(path);
            }
            None => log::warn!("no host name given, skipping vhost"),
        }
    }

    summary.package_manager = install_dependencies(ctx, shell)?;

    display::print_summary(&summary);
    Ok(Outcome::Completed(summary))
}

/// Ask for the install config and apply it. `None` when no theme name was given.
fn setup_theme(
    ctx: &SetupContext<'_>,
    prompts: &mut dyn PromptSource,
) -> Result<Option<MutationReport>> {
    let Some(theme) = prompts.ask(THEME_PROMPT)? else {
        log::info!("no theme name given, skipping theme setup");
        return Ok(None);
    };

    let config = InstallConfig::new(theme)
        .with_description(prompts.ask(DESCRIPTION_PROMPT)?.unwrap_or_default())
        .with_sql_host(prompts.ask(SQL_HOST_PROMPT)?)
        .with_sql_name(prompts.ask(SQL_NAME_PROMPT)?);

    display::print_step(&format!("Configuring theme '{}'", config.theme));
    let report = mutator::apply_configuration(&ctx.project, &config)?;
    Ok(Some(report))
}

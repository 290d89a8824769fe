//! The "on update" hook: same gate as install, then only the package manager

use super::{Outcome, SetupContext, Summary, display, gate, install_dependencies};
use crate::error::Result;
use crate::shell::ShellRunner;

pub fn on_update_event(ctx: &SetupContext<'_>, shell: &mut dyn ShellRunner) -> Result<Outcome> {
    if let Some(reason) = gate::check(ctx)? {
        log::info!("skipping update hook: {reason}");
        return Ok(Outcome::Skipped(reason));
    }

    let summary = Summary {
        package_manager: install_dependencies(ctx, shell)?,
        ..Summary::default()
    };

    display::print_summary(&summary);
    Ok(Outcome::Completed(summary))
}

//! `sitesetup version`: the crate version plus the built-in defaults a hook
//! runs with when no `sitesetup.yaml` overrides them

use crate::config::Settings;
use crate::config::settings::SETTINGS_FILE;
use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", render(&Settings::default()));
    Ok(())
}

fn render(defaults: &Settings) -> String {
    let env = &defaults.environment;
    format!(
        "sitesetup {version}\n\n\
         Defaults (override in {SETTINGS_FILE}):\n  \
         Environment: {constant} = '{development}' in {file}\n  \
         Vhost directory: {vhost}\n  \
         Package manager: {package_manager}\n",
        version = env!("CARGO_PKG_VERSION"),
        constant = env.constant,
        development = env.development,
        file = env.file,
        vhost = defaults.vhost.directory.display(),
        package_manager = defaults.package_manager.command_line(),
    )
}

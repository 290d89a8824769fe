//! sitesetup - post-install hook for SilverStripe project scaffolds
//!
//! Invoked from Composer's `post-install-cmd` and `post-update-cmd` scripts.
//! On a development machine it names the theme, fills in `package.json` and
//! the SilverStripe config fragments, optionally writes an Apache vhost and
//! runs `npm install`. Everywhere else it does nothing.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod environment;
mod error;
mod mutator;
mod operations;
mod project;
mod prompt;
mod shell;
#[cfg(test)]
mod test_fixtures;
mod vhost;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let workspace = cli.workspace.as_deref();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::PostInstall(args) => commands::post_install::run(workspace, config, args),
        Commands::PostUpdate(args) => commands::post_update::run(workspace, config, &args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

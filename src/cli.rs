//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitesetup - configure a freshly scaffolded SilverStripe project
#[derive(Parser, Debug)]
#[command(
    name = "sitesetup",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configure a freshly scaffolded SilverStripe project",
    long_about = "sitesetup runs from Composer's post-install and post-update scripts. On a \
                  development machine it names the theme, fills in package.json and the \
                  SilverStripe config, optionally writes an Apache vhost and runs npm install.",
    after_help = "\x1b[1m\x1b[32mComposer scripts:\x1b[0m\n    \
                  \"post-install-cmd\": [\"sitesetup post-install\"],\n    \
                  \"post-update-cmd\": [\"sitesetup post-update\"]"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "SITESETUP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Settings file (defaults to sitesetup.yaml in the project directory)
    #[arg(long, short = 'c', global = true, env = "SITESETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the post-install hook
    PostInstall(PostInstallArgs),

    /// Run the post-update hook
    PostUpdate(PostUpdateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by both hooks
#[derive(Parser, Debug, Default)]
pub struct GateArgs {
    /// Run even if the environment file does not declare a dev environment
    #[arg(long)]
    pub skip_env_check: bool,
}

/// Arguments for the post-install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run from the project root:\n    sitesetup post-install\n\n\
                  Write the vhost somewhere else:\n    sitesetup post-install --vhost-dir /etc/apache2/sites-enabled\n\n\
                  Answer the questions from a file:\n    sitesetup post-install < answers.txt")]
pub struct PostInstallArgs {
    /// Directory the vhost file is written to
    #[arg(long, value_name = "DIR", env = "SITESETUP_VHOST_DIR")]
    pub vhost_dir: Option<PathBuf>,

    #[command(flatten)]
    pub gate: GateArgs,
}

/// Arguments for the post-update command
#[derive(Parser, Debug)]
pub struct PostUpdateArgs {
    #[command(flatten)]
    pub gate: GateArgs,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sitesetup completions --shell bash > ~/.bash_completion.d/sitesetup\n\n\
                  Generate zsh completions:\n    sitesetup completions --shell zsh > ~/.zfunc/_sitesetup")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}

//! Configuration handling for sitesetup
//!
//! This module contains data structures for:
//! - `sitesetup.yaml` - Optional per-project tool settings
//! - `InstallConfig` - Operator answers applied to the project

pub mod install;
pub mod settings;

// Re-export commonly used types
pub use install::InstallConfig;
pub use settings::Settings;

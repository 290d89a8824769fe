//! Command implementations for the sitesetup CLI

pub mod completions;
pub mod helpers;
pub mod post_install;
pub mod post_update;
pub mod version;

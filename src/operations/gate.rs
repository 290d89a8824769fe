//! Deciding whether a hook should run at all

use std::fmt;

use super::SetupContext;
use crate::environment::detect_environment_type;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The environment file declares something other than development
    NotDevelopment(String),
    /// The project path does not contain the configured marker
    PathMarkerMissing(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotDevelopment(label) => {
                write!(f, "environment type is '{label}', not a development machine")
            }
            SkipReason::PathMarkerMissing(marker) => {
                write!(f, "project path does not contain '{marker}'")
            }
        }
    }
}

/// Returns the reason to skip, or `None` when the hook should run
pub fn check(ctx: &SetupContext<'_>) -> Result<Option<SkipReason>> {
    let gate = &ctx.settings.gate;

    if let Some(marker) = &gate.path_marker {
        let path = ctx.project.root().to_string_lossy().to_lowercase();
        if !path.contains(&marker.to_lowercase()) {
            return Ok(Some(SkipReason::PathMarkerMissing(marker.clone())));
        }
    }

    if gate.check_environment {
        let env = detect_environment_type(
            ctx.project.root(),
            &ctx.settings.environment,
            ctx.environment_source,
        )?;
        if !env.is_development() {
            return Ok(Some(SkipReason::NotDevelopment(env.describe().to_string())));
        }
        log::debug!("development environment declared in {:?}", env.file);
    }

    Ok(None)
}

//! `mysite/_config/logging.yml` update
//!
//! The first Monolog constructor argument is the log channel name. It is
//! written as a single-quoted literal (`'Acme Shop'`), or `'App'` when no
//! description was given.

use std::path::Path;

use serde_yaml::Value;

use super::yaml::{YamlDocuments, child_mapping, child_sequence};
use crate::config::InstallConfig;
use crate::error::Result;

pub fn apply_logging_config(docs: &mut YamlDocuments, config: &InstallConfig) {
    let injector = child_mapping(docs.target_mut("Injector"), "Injector");
    let monolog = child_mapping(injector, "Monolog");
    let constructor = child_sequence(monolog, "constructor");

    let channel = Value::String(format!("'{}'", config.log_channel()));
    match constructor.first_mut() {
        Some(first) => *first = channel,
        None => constructor.push(channel),
    }
}

pub fn update_logging_config(path: &Path, config: &InstallConfig) -> Result<()> {
    let mut docs = YamlDocuments::load(path)?;
    apply_logging_config(&mut docs, config);
    docs.save()
}

//! `mysite/_config/config.yml` update
//!
//! Sets `SSViewer.current_theme`. When either database field is supplied,
//! both `Database.host` and `Database.name` are written, so an omitted
//! field becomes `null`. When neither is supplied the `Database` section is
//! left alone.

use std::path::Path;

use serde_yaml::Value;

use super::yaml::{YamlDocuments, child_mapping, optional_string};
use crate::config::InstallConfig;
use crate::error::Result;

pub fn apply_viewer_config(docs: &mut YamlDocuments, config: &InstallConfig) {
    let viewer = child_mapping(docs.target_mut("SSViewer"), "SSViewer");
    viewer.insert(
        Value::from("current_theme"),
        Value::String(config.theme.clone()),
    );

    if config.has_database() {
        let database = child_mapping(docs.target_mut("Database"), "Database");
        database.insert(
            Value::from("host"),
            optional_string(config.sql_host.as_deref()),
        );
        database.insert(
            Value::from("name"),
            optional_string(config.sql_name.as_deref()),
        );
    }
}

pub fn update_viewer_config(path: &Path, config: &InstallConfig) -> Result<()> {
    let mut docs = YamlDocuments::load(path)?;
    apply_viewer_config(&mut docs, config);
    docs.save()
}

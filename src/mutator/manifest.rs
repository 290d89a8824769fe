//! `package.json` update
//!
//! The manifest is treated as an untyped JSON object. The theme name,
//! description and database details are overlaid at the top level (shallow
//! merge, new keys win). Key order is preserved.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue, json};

use crate::config::InstallConfig;
use crate::error::{self, Result};

/// Overlay the install config onto an existing manifest
pub fn merge_manifest(path: &Path, existing: JsonValue, config: &InstallConfig) -> Result<JsonValue> {
    let JsonValue::Object(mut manifest) = existing else {
        return Err(error::config::invalid(
            path,
            "package manifest must be a JSON object",
        ));
    };

    for (key, value) in overlay(config) {
        manifest.insert(key, value);
    }

    Ok(JsonValue::Object(manifest))
}

fn overlay(config: &InstallConfig) -> Map<String, JsonValue> {
    let mut map = Map::new();
    map.insert("name".to_string(), json!(config.theme));
    map.insert("description".to_string(), json!(config.description));
    map.insert(
        "sql".to_string(),
        json!({
            "name": config.sql_name,
            "host": config.sql_host,
        }),
    );
    map
}

/// Read, merge and write back the manifest at `path`
pub fn update_manifest(path: &Path, config: &InstallConfig) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))?;
    let existing: JsonValue =
        serde_json::from_str(&content).map_err(|e| error::config::parse_failed(path, e))?;

    let merged = merge_manifest(path, existing, config)?;

    let mut out =
        serde_json::to_string_pretty(&merged).map_err(|e| error::config::parse_failed(path, e))?;
    out.push('\n');
    fs::write(path, out).map_err(|e| error::fs::write_failed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::test_fixtures::{SCAFFOLD_MANIFEST, create_temp_dir, read_file, write_file};

    fn config() -> InstallConfig {
        InstallConfig::new("acme")
            .with_description("Acme Shop")
            .with_sql_host(Some("localhost".to_string()))
            .with_sql_name(Some("acme_db".to_string()))
    }

    #[test]
    fn test_overlay_sets_fields() {
        let merged = merge_manifest(Path::new("package.json"), json!({}), &config()).unwrap();
        assert_eq!(merged["name"], "acme");
        assert_eq!(merged["description"], "Acme Shop");
        assert_eq!(merged["sql"]["host"], "localhost");
        assert_eq!(merged["sql"]["name"], "acme_db");
    }

    #[test]
    fn test_unrelated_keys_preserved() {
        let existing = json!({"version": "1.0.0", "scripts": {"build": "gulp"}});
        let merged = merge_manifest(Path::new("package.json"), existing, &config()).unwrap();
        assert_eq!(merged["version"], "1.0.0");
        assert_eq!(merged["scripts"]["build"], "gulp");
    }

    #[test]
    fn test_sql_replaced_not_merged() {
        let existing = json!({"sql": {"name": "old", "port": 3306}});
        let merged = merge_manifest(
            Path::new("package.json"),
            existing,
            &InstallConfig::new("acme"),
        )
        .unwrap();
        assert_eq!(merged["sql"], json!({"name": null, "host": null}));
    }

    #[test]
    fn test_key_order_preserved() {
        let existing: JsonValue = serde_json::from_str(SCAFFOLD_MANIFEST).unwrap();
        let merged = merge_manifest(Path::new("package.json"), existing, &config()).unwrap();
        let keys: Vec<&str> = merged
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            ["name", "version", "description", "devDependencies", "sql"]
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let result = merge_manifest(Path::new("package.json"), json!([1, 2]), &config());
        assert!(matches!(result, Err(SetupError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_update_manifest_file() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", r#"{"version": "1.0.0"}"#);

        update_manifest(&temp.path().join("package.json"), &config()).unwrap();

        let written: JsonValue =
            serde_json::from_str(&read_file(temp.path(), "package.json")).unwrap();
        assert_eq!(written["version"], "1.0.0");
        assert_eq!(written["name"], "acme");
    }

    #[test]
    fn test_update_manifest_malformed() {
        let temp = create_temp_dir();
        write_file(temp.path(), "package.json", "{not json");

        let result = update_manifest(&temp.path().join("package.json"), &config());
        assert!(matches!(result, Err(SetupError::ConfigParseFailed { .. })));
        assert_eq!(read_file(temp.path(), "package.json"), "{not json");
    }
}

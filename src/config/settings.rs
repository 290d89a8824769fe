//! Tool settings loaded from `sitesetup.yaml`
//!
//! Every key is optional. Missing keys fall back to the conventional
//! SilverStripe development setup (environment file `_ss_environment.php`,
//! Apache vhosts under `/private/etc/apache2/sites-enabled`, `npm install`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result, config};

/// Settings filename looked up in the project root
pub const SETTINGS_FILE: &str = "sitesetup.yaml";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub environment: EnvironmentSettings,
    pub gate: GateSettings,
    pub vhost: VhostSettings,
    pub package_manager: PackageManagerSettings,
}

/// Where to find the environment declaration and how to read it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentSettings {
    /// File name searched for in the project directory and its parents
    pub file: String,
    /// Constant holding the environment type
    pub constant: String,
    /// Environment type that counts as a development machine
    pub development: String,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            file: "_ss_environment.php".to_string(),
            constant: "GLOBAL_ENVIRONMENT_TYPE".to_string(),
            development: "dev".to_string(),
        }
    }
}

/// Conditions that must hold before anything is touched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateSettings {
    pub check_environment: bool,
    /// Substring the project path must contain (case-insensitive)
    pub path_marker: Option<String>,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            check_environment: true,
            path_marker: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VhostSettings {
    pub directory: PathBuf,
    pub alias_suffix: String,
}

impl Default for VhostSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/private/etc/apache2/sites-enabled"),
            alias_suffix: "t.proxylocal.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PackageManagerSettings {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
        }
    }
}

impl PackageManagerSettings {
    /// Human readable command line, e.g. `npm install`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Settings {
    /// Parse settings from YAML content
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self =
            serde_yaml::from_str(content).map_err(|e| config::parse_failed(path, e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings for a project.
    ///
    /// An explicit path must exist. Without one, `sitesetup.yaml` in the
    /// project root is used when present, otherwise defaults.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => return Err(config::not_found(path)),
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(SETTINGS_FILE);
                if !candidate.exists() {
                    log::debug!("no {SETTINGS_FILE} in {}, using defaults", project_root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        log::debug!("loading settings from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| error::fs::read_failed(&path, e))?;
        Self::from_yaml(&path, &content)
    }

    fn validate(&self) -> Result<()> {
        if self.environment.file.trim().is_empty() {
            return Err(config::settings_invalid("environment.file must not be empty"));
        }
        if self.environment.constant.trim().is_empty() {
            return Err(config::settings_invalid(
                "environment.constant must not be empty",
            ));
        }
        if self.package_manager.program.trim().is_empty() {
            return Err(config::settings_invalid(
                "package_manager.program must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.environment.file, "_ss_environment.php");
        assert_eq!(settings.environment.constant, "GLOBAL_ENVIRONMENT_TYPE");
        assert_eq!(settings.environment.development, "dev");
        assert!(settings.gate.check_environment);
        assert!(settings.gate.path_marker.is_none());
        assert_eq!(
            settings.vhost.directory,
            PathBuf::from("/private/etc/apache2/sites-enabled")
        );
        assert_eq!(settings.package_manager.command_line(), "npm install");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r#"
gate:
  path_marker: Devsites
package_manager:
  program: yarn
  args: []
"#;
        let settings = Settings::from_yaml(Path::new("sitesetup.yaml"), yaml).unwrap();
        assert_eq!(settings.gate.path_marker.as_deref(), Some("Devsites"));
        assert!(settings.gate.check_environment);
        assert_eq!(settings.package_manager.command_line(), "yarn");
        assert_eq!(settings.vhost.alias_suffix, "t.proxylocal.com");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::from_yaml(Path::new("sitesetup.yaml"), "themes: {}\n");
        assert!(matches!(result, Err(SetupError::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_empty_program_rejected() {
        let yaml = "package_manager:\n  program: ''\n";
        let result = Settings::from_yaml(Path::new("sitesetup.yaml"), yaml);
        assert!(matches!(result, Err(SetupError::SettingsInvalid { .. })));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = create_temp_dir();
        let settings = Settings::load(temp.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_project_file() {
        let temp = create_temp_dir();
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "vhost:\n  directory: /etc/httpd/conf.d\n",
        )
        .unwrap();

        let settings = Settings::load(temp.path(), None).unwrap();
        assert_eq!(settings.vhost.directory, PathBuf::from("/etc/httpd/conf.d"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = create_temp_dir();
        let missing = temp.path().join("nope.yaml");
        let result = Settings::load(temp.path(), Some(&missing));
        assert!(matches!(result, Err(SetupError::ConfigNotFound { .. })));
    }
}

//! Apache virtual host setup
//!
//! Writes `<project dir name>.conf` into the configured vhost directory.
//! Assumes a local Apache with per-site files; Apache is not restarted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::VhostSettings;
use crate::error::{self, Result};

/// Development TLD appended to the host name
pub const SERVER_NAME_SUFFIX: &str = "dev";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VhostRecord {
    pub document_root: PathBuf,
    pub server_name: String,
    pub server_alias: String,
    pub file_name: String,
}

impl VhostRecord {
    pub fn new(base: &Path, host_name: &str, alias_suffix: &str) -> Self {
        let dir_name = base
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            document_root: base.to_path_buf(),
            server_name: format!("{host_name}.{SERVER_NAME_SUFFIX}"),
            server_alias: format!("{host_name}.{alias_suffix}"),
            file_name: format!("{dir_name}.conf"),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "<VirtualHost *:80>\n    DocumentRoot \"{}\"\n    ServerName {}\n    ServerAlias {}\n</VirtualHost>\n",
            self.document_root.display(),
            self.server_name,
            self.server_alias,
        )
    }
}

/// Write the vhost for `base`, overwriting an existing file. Returns the path written.
pub fn write_vhost(base: &Path, host_name: &str, settings: &VhostSettings) -> Result<PathBuf> {
    let record = VhostRecord::new(base, host_name, &settings.alias_suffix);
    let path = settings.directory.join(&record.file_name);

    log::debug!("writing vhost for {} to {}", record.server_name, path.display());
    fs::write(&path, record.render()).map_err(|e| error::fs::write_failed(&path, e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_render() {
        let record = VhostRecord::new(Path::new("/srv/myproj"), "myproj", "t.proxylocal.com");
        assert_eq!(
            record.render(),
            "<VirtualHost *:80>\n    DocumentRoot \"/srv/myproj\"\n    ServerName myproj.dev\n    ServerAlias myproj.t.proxylocal.com\n</VirtualHost>\n"
        );
        assert_eq!(record.file_name, "myproj.conf");
    }

    #[test]
    fn test_host_name_independent_of_directory() {
        let record = VhostRecord::new(Path::new("/Users/me/Devsites/acme-2016"), "acme", "example.test");
        assert_eq!(record.server_name, "acme.dev");
        assert_eq!(record.server_alias, "acme.example.test");
        assert_eq!(record.file_name, "acme-2016.conf");
    }

    #[test]
    fn test_write_vhost() {
        let temp = create_temp_dir();
        let settings = VhostSettings {
            directory: temp.path().to_path_buf(),
            ..VhostSettings::default()
        };

        let path = write_vhost(Path::new("/srv/myproj"), "myproj", &settings).unwrap();
        assert_eq!(path, temp.path().join("myproj.conf"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("DocumentRoot \"/srv/myproj\""));
        assert!(content.contains("ServerName myproj.dev"));
    }

    #[test]
    fn test_write_vhost_overwrites() {
        let temp = create_temp_dir();
        let settings = VhostSettings {
            directory: temp.path().to_path_buf(),
            ..VhostSettings::default()
        };
        std::fs::write(temp.path().join("myproj.conf"), "stale").unwrap();

        write_vhost(Path::new("/srv/myproj"), "fresh", &settings).unwrap();
        let content = std::fs::read_to_string(temp.path().join("myproj.conf")).unwrap();
        assert!(content.contains("ServerName fresh.dev"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_write_vhost_missing_directory() {
        let temp = create_temp_dir();
        let settings = VhostSettings {
            directory: temp.path().join("sites-enabled"),
            ..VhostSettings::default()
        };

        let result = write_vhost(Path::new("/srv/myproj"), "myproj", &settings);
        assert!(matches!(result, Err(SetupError::FileWriteFailed { .. })));
    }
}

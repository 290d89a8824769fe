//! Test fixtures shared by the unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_scaffold, write_environment_file};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_scaffold();
//!     write_environment_file(temp.path(), "dev");
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `package.json` as shipped by the scaffold
pub const SCAFFOLD_MANIFEST: &str = r#"{
  "name": "default",
  "version": "1.0.0",
  "description": "",
  "devDependencies": {
    "gulp": "^3.9.0"
  }
}
"#;

/// `mysite/_config/config.yml` as shipped by the scaffold
pub const SCAFFOLD_VIEWER_CONFIG: &str = r"---
Name: mysite
After:
  - 'framework/*'
  - 'cms/*'
---
SSViewer:
  current_theme: default
Database:
  host: db.example.com
  name: scaffold
";

/// `mysite/_config/logging.yml` as shipped by the scaffold
pub const SCAFFOLD_LOGGING_CONFIG: &str = r"---
Name: logging
---
Injector:
  Monolog:
    class: Monolog\Logger
    constructor:
      - 'Scaffold'
      - [ '%$StreamHandler' ]
";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a nested directory inside a temp directory
///
/// # Panics
///
/// Panics if the directory cannot be created.
pub fn create_nested_dir(temp: &TempDir, relative: &str) -> PathBuf {
    let path = temp.path().join(relative);
    std::fs::create_dir_all(&path).expect("Failed to create nested directory");
    path
}

/// Write a file relative to `root`, creating parent directories
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Read a file relative to `root`
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn read_file(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).expect("Failed to read file")
}

/// Write `_ss_environment.php` declaring the given environment type
pub fn write_environment_file(dir: &Path, env_type: &str) {
    write_file(
        dir,
        "_ss_environment.php",
        &format!("<?php\ndefine('GLOBAL_ENVIRONMENT_TYPE', '{env_type}');\n"),
    );
}

/// Create a freshly scaffolded project: default theme, manifest, both
/// config fragments and the readme.
#[must_use]
pub fn create_scaffold() -> TempDir {
    let temp = create_temp_dir();
    let root = temp.path();

    write_file(root, "themes/default/templates/Page.ss", "<html></html>");
    write_file(root, "package.json", SCAFFOLD_MANIFEST);
    write_file(root, "mysite/_config/config.yml", SCAFFOLD_VIEWER_CONFIG);
    write_file(root, "mysite/_config/logging.yml", SCAFFOLD_LOGGING_CONFIG);
    write_file(root, "README.md", "# Scaffold\n");

    temp
}

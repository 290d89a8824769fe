//! Common test utilities for sitesetup integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SCAFFOLD_MANIFEST: &str = r#"{
  "name": "default",
  "version": "1.0.0",
  "private": true
}
"#;

pub const SCAFFOLD_VIEWER_CONFIG: &str = r"---
Name: mysite
After:
  - 'framework/*'
---
SSViewer:
  current_theme: default
Database:
  host: db.example.com
  name: scaffold
";

pub const SCAFFOLD_LOGGING_CONFIG: &str = r"---
Name: logging
---
Injector:
  Monolog:
    constructor:
      - 'Scaffold'
";

/// Stand-in for `npm install` that just prints a marker
pub const FAKE_PACKAGE_MANAGER: &str = "package_manager:\n  program: echo\n  args: [fake-npm-install]\n";

/// A scaffolded project in a temp directory
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    /// An empty project directory
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("acme-site");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        Self { temp, path }
    }

    /// A project as produced by the scaffold, with the fake package manager
    pub fn scaffold() -> Self {
        let project = Self::empty();
        project.write_file("themes/default/templates/Page.ss", "<html></html>");
        project.write_file("package.json", SCAFFOLD_MANIFEST);
        project.write_file("mysite/_config/config.yml", SCAFFOLD_VIEWER_CONFIG);
        project.write_file("mysite/_config/logging.yml", SCAFFOLD_LOGGING_CONFIG);
        project.write_file("README.md", "# Scaffold\n");
        project.write_file("sitesetup.yaml", FAKE_PACKAGE_MANAGER);
        project
    }

    /// Declare the environment type in `_ss_environment.php` next to the project
    pub fn declare_environment(&self, env_type: &str) {
        let content = format!("<?php\ndefine('GLOBAL_ENVIRONMENT_TYPE', '{env_type}');\n");
        std::fs::write(self.temp.path().join("_ss_environment.php"), content)
            .expect("Failed to write environment file");
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Contents of every file the install hook may edit
    #[allow(dead_code)]
    pub fn snapshot(&self) -> Vec<String> {
        ["package.json", "mysite/_config/config.yml", "mysite/_config/logging.yml"]
            .iter()
            .map(|path| self.read_file(path))
            .collect()
    }
}

/// The real sitesetup binary, pointed at `workspace`
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn sitesetup_cmd_for_workspace(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sitesetup").expect("Failed to find sitesetup binary");
    cmd.arg("--workspace").arg(workspace);
    cmd.env_remove("SITESETUP_CONFIG")
        .env_remove("SITESETUP_VHOST_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Join answers into the stdin expected by the line-based prompts
#[allow(dead_code)]
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

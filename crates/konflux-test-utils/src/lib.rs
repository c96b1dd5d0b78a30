//! Shared test utilities for the konflux workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`TestConfigDir`] builds a temporary resource tree
//!   (`konflux.yaml`, `applications/`, `repos/`)

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary config directory with helpers for writing resources.
///
/// # Example
///
/// ```rust,no_run
/// use konflux_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::new();
/// dir.write_config(&["1.15", "next"], &["pipelines"]);
/// dir.write_application("pipelines", &["pipeline", "cli"]);
/// dir.write_repository("pipeline", "components:\n  - name: controller\n");
/// dir.write_repository("cli", "components: []\n");
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory; resources live under `config/`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory holding `konflux.yaml`, `applications/` and `repos/`.
    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    /// Path of the root config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("konflux.yaml")
    }

    /// Directory generated output should go to.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Write `konflux.yaml` listing `versions` and `applications`.
    pub fn write_config(&self, versions: &[&str], applications: &[&str]) {
        let content = format!(
            "versions:\n{}applications:\n{}",
            yaml_list(versions),
            yaml_list(applications)
        );
        self.write_raw("konflux.yaml", &content);
    }

    /// Write `applications/{name}.yaml` referencing `repositories`.
    pub fn write_application(&self, name: &str, repositories: &[&str]) {
        let content = format!("repositories:\n{}", yaml_list(repositories));
        self.write_raw(&format!("applications/{name}.yaml"), &content);
    }

    /// Write `repos/{name}.yaml` with the given YAML body.
    pub fn write_repository(&self, name: &str, body: &str) {
        self.write_raw(&format!("repos/{name}.yaml"), body);
    }

    /// Write arbitrary content relative to the config directory.
    pub fn write_raw(&self, relative: &str, content: &str) {
        let path = self.config_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestConfigDir: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestConfigDir: failed to write {}: {e}", path.display()));
    }
}

/// Render items as a YAML block sequence of plain scalars.
fn yaml_list(items: &[&str]) -> String {
    if items.is_empty() {
        return "  []\n".to_string();
    }
    items
        .iter()
        .map(|item| format!("  - {item}\n"))
        .collect()
}

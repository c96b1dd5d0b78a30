//! Process-wide settings
//!
//! Built once at startup and passed by reference into the resolvers.

use std::path::PathBuf;

/// Default location of the root config file.
pub const DEFAULT_CONFIG_FILE: &str = "config/konflux.yaml";

/// Default GitHub organization hosting the repositories.
pub const DEFAULT_ORG: &str = "openshift-pipelines";

/// Default directory for generated output.
pub const DEFAULT_OUTPUT_DIR: &str = ".konflux";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root config file, loaded as given; its directory holds `applications/`
    /// and `repos/` in the same format
    pub config_file: PathBuf,
    /// Organization used for repository URLs and image names
    pub org: String,
    /// Directory the generator writes into
    pub output_dir: PathBuf,
    /// Resolve everything but skip writing output
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            org: DEFAULT_ORG.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dry_run: false,
        }
    }
}

impl Settings {
    /// Resource name of the root config (the file stem, e.g. `konflux`).
    pub fn root_name(&self) -> String {
        self.config_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "konflux".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let settings = Settings::default();
        assert_eq!(settings.config_file, PathBuf::from("config/konflux.yaml"));
        assert_eq!(settings.root_name(), "konflux");
        assert_eq!(settings.org, "openshift-pipelines");
        assert!(!settings.dry_run);
    }

    #[test]
    fn root_name_drops_any_extension() {
        let settings = Settings {
            config_file: PathBuf::from("releases.yml"),
            ..Default::default()
        };
        assert_eq!(settings.root_name(), "releases");
    }
}

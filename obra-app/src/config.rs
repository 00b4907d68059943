use anyhow::{Context, Result};
use obra_core::{
    seed::{builtin_seed, load_seed_file},
    settings::Settings,
};
use obra_schemas::file_formats::SeedFile;
use std::path::Path;
use tracing::info;

/// Settings plus the records a session starts from.
pub struct SessionConfig {
    pub settings: Settings,
    pub seed: SeedFile,
}

impl SessionConfig {
    /// Loads the settings file and seed file when given, falling back to
    /// defaults and the built-in demo seed.
    pub fn load(settings_path: Option<&Path>, seed_path: Option<&Path>) -> Result<Self> {
        let settings = match settings_path {
            Some(path) => {
                info!("Loading settings from '{}'", path.display());
                Settings::from_yaml_file(path)
                    .with_context(|| format!("Failed to load settings from {:?}", path))?
            }
            None => Settings::default(),
        };

        let seed = match seed_path {
            Some(path) => {
                info!("Loading seed data from '{}'", path.display());
                load_seed_file(path)
                    .with_context(|| format!("Failed to load seed data from {:?}", path))?
            }
            None => builtin_seed().context("Built-in seed data is malformed")?,
        };

        info!(
            projects = seed.projects.len(),
            approvals = seed.approvals.len(),
            catalog = seed.catalog.len(),
            "Seed data loaded"
        );
        Ok(Self { settings, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_files() {
        let config = SessionConfig::load(None, None).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.seed.catalog.len(), 7);
    }

    #[test]
    fn reads_settings_and_seed_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings_path = dir.path().join("settings.yaml");
        let seed_path = dir.path().join("seed.yaml");
        fs::write(&settings_path, "strict_quantities: true\n").unwrap();
        fs::write(&seed_path, "schema_version: \"1\"\ncatalog: [Arena Fina]\n").unwrap();

        let config = SessionConfig::load(Some(&settings_path), Some(&seed_path)).unwrap();

        assert!(config.settings.strict_quantities);
        assert!(config.seed.projects.is_empty());
        assert_eq!(config.seed.catalog, vec!["Arena Fina".to_string()]);
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(SessionConfig::load(None, Some(&missing)).is_err());
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the record store.
///
/// This struct holds the names of the two flat files the repositories write
/// to. Paths are resolved relative to the data root at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File the animal repository is flushed to.
    animals_file: String,

    /// File the enclosure repository is flushed to.
    habitats_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animals_file: "animals.txt".to_string(),
            habitats_file: "habitats.txt".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Loads `config.toml` from the given root directory, falling back to
    /// defaults if the file is missing or malformed.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join("config.toml");
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// The file name the animal repository is flushed to.
    #[must_use]
    pub fn animals_file(&self) -> &str {
        &self.animals_file
    }

    /// The file name the enclosure repository is flushed to.
    #[must_use]
    pub fn habitats_file(&self) -> &str {
        &self.habitats_file
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::Config;

    #[test]
    fn default_file_names() {
        let config = Config::default();
        assert_eq!(config.animals_file(), "animals.txt");
        assert_eq!(config.habitats_file(), "habitats.txt");
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config {
            animals_file: "beasts.txt".to_string(),
            habitats_file: "pens.txt".to_string(),
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("animals_file = \"beasts.txt\"").unwrap();
        assert_eq!(config.animals_file(), "beasts.txt");
        assert_eq!(config.habitats_file(), "habitats.txt");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Config::load_or_default(tmp.path()), Config::default());
    }
}

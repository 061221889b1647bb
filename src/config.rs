//! Configuration file handling.
//!
//! The configuration file is stored at `$SPENDCHART_HOME/config.json` and contains settings for
//! the spendchart application: an optional custom color palette and the default output format.
//! A missing config file means defaults, so the `build` and `categories` commands work without
//! ever running `init`.

use crate::palette::Palette;
use crate::render::Format;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "spendchart";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$SPENDCHART_HOME` and from there it loads `$SPENDCHART_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory (if needed) and an initial `config.json` inside it.
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the root of the data directory, e.g.
    ///   `$HOME/spendchart`
    /// - `colors` - An optional custom palette to store in the config file. When `None`, the
    ///   default palette is used at runtime and nothing is stored.
    ///
    /// # Errors
    /// - Returns an error if a config file already exists in `dir`, or if any file operation
    ///   fails.
    pub fn create(dir: impl Into<PathBuf>, colors: Option<Vec<String>>) -> Result<Self> {
        // Create the directory if it does not exist
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .context("Unable to create the spendchart home directory")?;
        let root = utils::canonicalize(&maybe_relative)?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!(
                "A config file already exists at '{}'",
                config_path.display()
            );
        }

        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            colors,
            format: None,
        };
        config_file.save(&config_path)?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// This will
    /// - validate that `home` and the config file exist
    /// - load and validate the config file
    /// - return the loaded configuration object
    pub fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative).context("Spendchart home is missing")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path)?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Loads the config if `home` contains one, otherwise returns defaults without touching the
    /// disk.
    pub fn load_or_default(home: impl Into<PathBuf>) -> Result<Self> {
        let root = home.into();
        if root.join(CONFIG_JSON).is_file() {
            Self::load(root)
        } else {
            Ok(Self {
                config_path: root.join(CONFIG_JSON),
                root,
                config_file: ConfigFile::default(),
            })
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The palette to use: the configured colors if present (validated here), otherwise the
    /// default palette.
    pub fn palette(&self) -> Result<Palette> {
        match &self.config_file.colors {
            Some(colors) => Palette::new(colors.iter().cloned()).with_context(|| {
                format!("Invalid palette in '{}'", self.config_path.display())
            }),
            None => Ok(Palette::default()),
        }
    }

    /// The default output format, `json` unless configured otherwise.
    pub fn format(&self) -> Format {
        self.config_file.format.unwrap_or_default()
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "spendchart",
///   "config_version": 1,
///   "colors": ["#8884d8", "#82ca9d"],
///   "format": "table"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "spendchart"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Custom palette colors (optional). When absent, the default palette is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<String>>,

    /// Default output format (optional). When absent, output defaults to json.
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<Format>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            colors: None,
            format: None,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if `app_name` is wrong.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)?;

        // Validate app_name
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data).context("Unable to write config file")
    }

    #[cfg(test)]
    fn new(colors: Option<Vec<String>>, format: Option<Format>) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            colors,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("spendchart_home");

        let config = Config::create(&home, None).unwrap();

        assert!(config.config_path().is_file());
        assert_eq!(config.palette().unwrap(), Palette::default());
        assert_eq!(config.format(), Format::Json);
    }

    #[test]
    fn test_config_create_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("spendchart_home");

        Config::create(&home, None).unwrap();
        let result = Config::create(&home, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("already exists"));
    }

    #[test]
    fn test_config_create_then_load_with_colors() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("spendchart_home");
        let colors = vec!["#111111".to_string(), "#222222".to_string()];

        Config::create(&home, Some(colors.clone())).unwrap();
        let config = Config::load(&home).unwrap();

        let palette = config.palette().unwrap();
        assert_eq!(palette.colors(), colors.as_slice());
    }

    #[test]
    fn test_config_load_missing_home() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path().join("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("nope")).unwrap();
        assert_eq!(config.palette().unwrap(), Palette::default());
        assert_eq!(config.format(), Format::Json);
    }

    #[test]
    fn test_config_load_or_default_with_file() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("spendchart_home");
        Config::create(&home, Some(vec!["#123456".to_string()])).unwrap();

        let config = Config::load_or_default(&home).unwrap();
        assert_eq!(config.palette().unwrap().colors()[0], "#123456");
    }

    #[test]
    fn test_config_bad_palette_reported() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("spendchart_home");
        Config::create(&home, Some(vec!["not-a-color".to_string()])).unwrap();

        let config = Config::load(&home).unwrap();
        assert!(config.palette().is_err());
    }

    #[test]
    fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_JSON);

        let json = r#"{
            "app_name": "wrong_app",
            "config_version": 1
        }"#;
        utils::write(&config_path, json).unwrap();

        let result = ConfigFile::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[test]
    fn test_config_file_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_JSON);

        let original = ConfigFile::new(
            Some(vec!["#8884d8".to_string()]),
            Some(Format::Table),
        );
        original.save(&config_path).unwrap();
        let loaded = ConfigFile::load(&config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_config_file_load_minimal() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_JSON);

        let json = r#"{
            "app_name": "spendchart",
            "config_version": 1
        }"#;
        utils::write(&config_path, json).unwrap();

        let config = ConfigFile::load(&config_path).unwrap();
        assert_eq!(config.colors, None);
        assert_eq!(config.format, None);
    }

    #[test]
    fn test_config_file_serialization_omits_none_fields() {
        let config = ConfigFile::new(None, None);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("colors"));
        assert!(!json.contains("format"));
    }
}

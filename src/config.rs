use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// How the command line tool prints recipes and shopping lists
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the JSON recipe store
    #[serde(default = "default_recipes_file")]
    pub recipes_file: PathBuf,
    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_file: default_recipes_file(),
            output: OutputFormat::default(),
        }
    }
}

fn default_recipes_file() -> PathBuf {
    PathBuf::from("recipes.json")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RESEPTIKIRJA__ prefix
    /// 2. reseptikirja.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RESEPTIKIRJA__RECIPES_FILE
    pub fn load() -> Result<Self, ConfigError> {
        load_config("reseptikirja")
    }
}

/// Load configuration from `<basename>.toml` (optional) and environment
/// variables with the RESEPTIKIRJA prefix.
pub fn load_config(basename: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(basename).required(false))
        // Use double underscore as separator: RESEPTIKIRJA__RECIPES_FILE
        .add_source(
            Environment::with_prefix("RESEPTIKIRJA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

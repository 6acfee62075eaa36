use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main validation configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ValidationConfig {
    /// Extra placeholder values, added on top of the built-in ones
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

/// Additional values each field treats as "empty".
///
/// The built-in lists always apply; these can only add to them.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PlaceholderConfig {
    /// Extra reserved titles (e.g. "untitled")
    #[serde(default)]
    pub title: Vec<String>,
    /// Extra "no ingredients" markers (e.g. "tbd")
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl ValidationConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FIELDS__ prefix
    /// 2. recipe-fields.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FIELDS__PLACEHOLDERS__TITLE="untitled,tbd"
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `recipe-fields.toml` and environment variables.
/// See [`ValidationConfig::load`].
pub fn load_config() -> Result<ValidationConfig, ConfigError> {
    load_config_from("recipe-fields")
}

/// Load configuration from the given file (extension optional) and
/// environment variables. A missing file is not an error.
pub fn load_config_from(path: &str) -> Result<ValidationConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(path).required(false))
        // Use double underscore for nested: RECIPE_FIELDS__PLACEHOLDERS__TITLE
        .add_source(
            Environment::with_prefix("RECIPE_FIELDS")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("placeholders.title")
                .with_list_parse_key("placeholders.ingredients")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

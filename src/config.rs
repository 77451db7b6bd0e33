use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Built-in unit vocabulary: measurement units, bare/abbreviated unit forms,
/// and qualitative quantity words, all lowercase. Matching is exact-word, so
/// the two-word entry "по вкусу" never matches a single split word; it is
/// kept because downstream data depends on the current output.
const DEFAULT_UNITS: &[&str] = &[
    "г", "гр", "грамм", "кг", "мг", "л", "мл", "литр", "литров", "ст", "ст.л",
    "ст.л.", "ложка", "ложки", "стакан", "стакана", "стаканов", "шт", "шт.",
    "штук", "штуки", "по вкусу", "щепотка", "щепотки", "чайн", "ч.л.", "ч.л",
    "чл", "столовая", "чайная",
];

/// Root configuration structure, deserialized from
/// `.ingredient-normalizr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Column names in the input/output spreadsheet.
    #[serde(default)]
    pub columns: ColumnsConfig,
    /// Unit vocabulary adjustments.
    #[serde(default)]
    pub units: UnitsConfig,
}

/// Names of the source and target columns.
#[derive(Debug, Deserialize)]
pub struct ColumnsConfig {
    /// Column holding the raw ingredient strings.
    #[serde(default = "default_source_column")]
    pub source: String,
    /// Column written with the normalized result.
    #[serde(default = "default_target_column")]
    pub target: String,
}

fn default_source_column() -> String {
    "ingredients".to_string()
}

fn default_target_column() -> String {
    "normalized_ingredients".to_string()
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        ColumnsConfig {
            source: default_source_column(),
            target: default_target_column(),
        }
    }
}

/// How the unit vocabulary is assembled.
#[derive(Debug, Default, Deserialize)]
pub struct UnitsConfig {
    /// Replace the built-in vocabulary entirely.
    #[serde(default)]
    pub replace: Option<Vec<String>>,
    /// Entries appended to the built-in vocabulary.
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Config {
    /// The effective unit vocabulary for this run, lowercased.
    pub fn unit_vocabulary(&self) -> Vec<String> {
        let mut units: Vec<String> = match &self.units.replace {
            Some(replace) => replace.iter().map(|u| u.to_lowercase()).collect(),
            None => DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
        };
        units.extend(self.units.extra.iter().map(|u| u.to_lowercase()));
        units
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: ColumnsConfig::default(),
            units: UnitsConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.ingredient-normalizr/config.toml`
/// 3. `~/.config/ingredient-normalizr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".ingredient-normalizr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("ingredient-normalizr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

//! Runtime settings and defaults.
//!
//! Settings merge three layers: compiled defaults, an optional `linguatale.toml`
//! in the working directory, and `LINGUATALE_*` environment variables, with
//! later layers taking precedence. The API key is deliberately not part of this
//! struct; the gateway reads `OPENAI_API_KEY` from the environment.

use config::{Config, Environment, File, FileFormat};
use linguatale_error::{ConfigError, LinguataleResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default nucleus sampling parameter.
pub const DEFAULT_TOP_P: f32 = 0.9;
/// Default passage word count.
pub const DEFAULT_WORD_COUNT: u32 = 500;
/// Default maximum gateway retry attempts.
pub const API_MAX_RETRIES: usize = 3;
/// Default per-attempt gateway timeout in seconds.
pub const API_TIMEOUT_SECS: u64 = 30;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_retries() -> usize {
    API_MAX_RETRIES
}

fn default_timeout_secs() -> u64 {
    API_TIMEOUT_SECS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_top_p() -> f32 {
    DEFAULT_TOP_P
}

fn default_word_count() -> u32 {
    DEFAULT_WORD_COUNT
}

/// Generator runtime settings.
///
/// # Example TOML
///
/// ```toml
/// model = "gpt-4o-mini"
/// max_retries = 5
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Completion model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum gateway retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Per-attempt gateway timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Default nucleus sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Default passage word count
    #[serde(default = "default_word_count")]
    pub word_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            word_count: default_word_count(),
        }
    }
}

impl Settings {
    /// Load settings from `linguatale.toml` and the environment.
    ///
    /// A missing configuration file is not an error; the compiled defaults
    /// apply. A present but malformed file is.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration sources cannot be read or do not
    /// deserialize into [`Settings`].
    pub fn load() -> LinguataleResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::new("linguatale", FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("LINGUATALE").try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        debug!(model = %settings.model, max_retries = settings.max_retries, "Loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_retries, API_MAX_RETRIES);
        assert_eq!(settings.timeout_secs, API_TIMEOUT_SECS);
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(settings.top_p, DEFAULT_TOP_P);
        assert_eq!(settings.word_count, DEFAULT_WORD_COUNT);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let settings: Settings = toml::from_str("model = \"gpt-4o-mini\"").unwrap();
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.max_retries, API_MAX_RETRIES);
    }
}

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How long cached translations and API answers stay valid, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Recipe API configuration
    #[serde(default)]
    pub spoonacular: SpoonacularConfig,
    /// Translation service configuration
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Configuration for the Spoonacular recipe API
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpoonacularConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API (for proxies and tests)
    pub base_url: Option<String>,
}

/// Configuration for the translation service
#[derive(Debug, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider: "deepl" or "google"
    #[serde(default = "default_translation_provider")]
    pub provider: String,
    /// API key (can also be set via DEEPL_API_KEY or GOOGLE_TRANSLATE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL override for the provider endpoint
    pub base_url: Option<String>,
    /// Whether recipe steps are translated along with title and ingredients
    #[serde(default = "default_translate_steps")]
    pub translate_steps: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: default_translation_provider(),
            api_key: None,
            base_url: None,
            translate_steps: default_translate_steps(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            cache_ttl_secs: default_cache_ttl_secs(),
            spoonacular: SpoonacularConfig::default(),
            translation: TranslationConfig::default(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_translation_provider() -> String {
    "deepl".to_string()
}

fn default_translate_steps() -> bool {
    true
}

/// Treat blank values the same as missing ones.
fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_key(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok().as_ref())
}

impl AppConfig {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RESEP__ prefix
    /// 2. secrets.toml in current directory
    /// 3. config.toml in current directory (or the given path)
    /// 4. Default values
    ///
    /// Environment variable format: RESEP__SPOONACULAR__API_KEY
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config").required(false),
        };

        Config::builder()
            .add_source(config_file)
            .add_source(File::with_name("secrets").required(false))
            .add_source(
                Environment::with_prefix("RESEP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document, without files or environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Spoonacular key from config, falling back to SPOONACULAR_API_KEY
    pub fn spoonacular_api_key(&self) -> Option<String> {
        non_empty(self.spoonacular.api_key.as_ref()).or_else(|| env_key("SPOONACULAR_API_KEY"))
    }

    /// Translation key from config, falling back to the provider's environment variable
    pub fn translation_api_key(&self) -> Option<String> {
        non_empty(self.translation.api_key.as_ref()).or_else(|| {
            match self.translation.provider.as_str() {
                "google" => env_key("GOOGLE_TRANSLATE_API_KEY"),
                _ => env_key("DEEPL_API_KEY"),
            }
        })
    }
}

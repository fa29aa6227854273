use crate::config::AppConfig;
use crate::error::{ResepError, Result};
use crate::translators::{DeepLTranslator, GoogleTranslator, Translator};
use reqwest::blocking::Client;

pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create the configured translator.
    ///
    /// A missing API key does not fail here; the translator reports
    /// `MissingCredentials` when it is first used.
    pub fn create(config: &AppConfig, client: Client) -> Result<Box<dyn Translator>> {
        let api_key = config.translation_api_key();
        let base_url = config.translation.base_url.clone();

        match config.translation.provider.as_str() {
            "deepl" => Ok(Box::new(match base_url {
                Some(url) => DeepLTranslator::with_base_url(client, api_key, url),
                None => DeepLTranslator::new(client, api_key),
            })),
            "google" => Ok(Box::new(match base_url {
                Some(url) => GoogleTranslator::with_base_url(client, api_key, url),
                None => GoogleTranslator::new(client, api_key),
            })),
            other => Err(ResepError::Config(config::ConfigError::Message(format!(
                "Unknown translation provider: {}",
                other
            )))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["deepl", "google"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(provider: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.translation.provider = provider.to_string();
        config.translation.api_key = Some("test-key".to_string());
        config
    }

    #[test]
    fn test_create_deepl_translator() {
        let translator = TranslatorFactory::create(&config_for("deepl"), Client::new()).unwrap();
        assert_eq!(translator.provider_name(), "deepl");
    }

    #[test]
    fn test_create_google_translator() {
        let translator = TranslatorFactory::create(&config_for("google"), Client::new()).unwrap();
        assert_eq!(translator.provider_name(), "google");
    }

    #[test]
    fn test_unknown_provider() {
        let result = TranslatorFactory::create(&config_for("babelfish"), Client::new());
        match result {
            Err(e) => assert!(e.to_string().contains("Unknown translation provider")),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_available_providers() {
        let providers = TranslatorFactory::available_providers();
        assert_eq!(providers, vec!["deepl", "google"]);
    }
}

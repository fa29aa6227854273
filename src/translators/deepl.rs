use crate::error::{ResepError, Result};
use crate::translators::{ensure_same_length, Language, Translator};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const FREE_API_URL: &str = "https://api-free.deepl.com";
const PRO_API_URL: &str = "https://api.deepl.com";

/// DeepL signals an exhausted character quota with this status
const QUOTA_EXCEEDED: u16 = 456;

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a [String],
    source_lang: &'static str,
    target_lang: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

fn source_code(language: Language) -> &'static str {
    match language {
        Language::Indonesian => "ID",
        Language::English => "EN",
    }
}

fn target_code(language: Language) -> &'static str {
    match language {
        Language::Indonesian => "ID",
        Language::English => "EN-US",
    }
}

pub struct DeepLTranslator {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl DeepLTranslator {
    /// Create a DeepL translator. Free-plan keys (suffix `:fx`) use the free endpoint.
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        let base_url = match api_key.as_deref() {
            Some(key) if key.ends_with(":fx") => FREE_API_URL,
            _ => PRO_API_URL,
        };
        Self::with_base_url(client, api_key, base_url.to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        DeepLTranslator {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Translator for DeepLTranslator {
    fn provider_name(&self) -> &str {
        "deepl"
    }

    fn translate_batch(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ResepError::MissingCredentials("DeepL"))?;
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "Translating {} texts with DeepL ({} -> {})",
            texts.len(),
            source.code(),
            target.code()
        );
        let response = self
            .client
            .post(format!("{}/v2/translate", self.base_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", api_key))
            .json(&TranslateRequest {
                text: texts,
                source_lang: source_code(source),
                target_lang: target_code(target),
            })
            .send()?;

        let status = response.status();
        if status.as_u16() == QUOTA_EXCEEDED || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ResepError::QuotaExceeded("DeepL"));
        }
        if !status.is_success() {
            return Err(ResepError::Status {
                service: "DeepL",
                status,
            });
        }

        let body: TranslateResponse = response.json()?;
        let translations = body.translations.into_iter().map(|t| t.text).collect();
        ensure_same_length("DeepL", texts.len(), translations)
    }
}

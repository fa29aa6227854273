use crate::error::{ResepError, Result};
use crate::translators::{ensure_same_length, Language, Translator};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://translation.googleapis.com";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a [String],
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorReason>,
}

#[derive(Deserialize)]
struct ErrorReason {
    #[serde(default)]
    reason: String,
}

/// Reasons Google reports on a 403 when a usage limit was hit
const QUOTA_REASONS: [&str; 3] = ["dailyLimitExceeded", "rateLimitExceeded", "userRateLimitExceeded"];

fn is_quota_body(body: &str) -> bool {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| {
            e.error
                .errors
                .iter()
                .any(|r| QUOTA_REASONS.contains(&r.reason.as_str()))
        })
        .unwrap_or(false)
}

/// Google Cloud Translation (v2 basic) client
pub struct GoogleTranslator {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, API_URL.to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        GoogleTranslator {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Translator for GoogleTranslator {
    fn provider_name(&self) -> &str {
        "google"
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
            .ok_or(ResepError::MissingCredentials("Google Translate"))?;
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "Translating {} texts with Google ({} -> {})",
            texts.len(),
            source.code(),
            target.code()
        );
        let response = self
            .client
            .post(format!("{}/language/translate/v2", self.base_url))
            .query(&[("key", api_key)])
            .json(&TranslateRequest {
                q: texts,
                source: source.code(),
                target: target.code(),
                format: "text",
            })
            .send()?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ResepError::QuotaExceeded("Google Translate"));
        }
        if status == StatusCode::FORBIDDEN {
            let body = response.text().unwrap_or_default();
            if is_quota_body(&body) {
                return Err(ResepError::QuotaExceeded("Google Translate"));
            }
            debug!("Google Translate refused the request: {}", body);
            return Err(ResepError::Status {
                service: "Google Translate",
                status,
            });
        }
        if !status.is_success() {
            return Err(ResepError::Status {
                service: "Google Translate",
                status,
            });
        }

        let body: TranslateResponse = response.json()?;
        let translations = body
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();
        ensure_same_length("Google Translate", texts.len(), translations)
    }
}

mod cached;
mod deepl;
mod factory;
mod google;

pub use cached::CachingTranslator;
pub use deepl::DeepLTranslator;
pub use factory::TranslatorFactory;
pub use google::GoogleTranslator;

use crate::error::{ResepError, Result};

/// Languages the application translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Indonesian,
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }
}

/// Unified trait for all translation services
pub trait Translator: Send + Sync {
    /// Get the provider name (e.g., "deepl", "google")
    fn provider_name(&self) -> &str;

    /// Translate several texts in one call.
    ///
    /// The result has the same length as `texts` and `result[i]` is the
    /// translation of `texts[i]`.
    fn translate_batch(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Result<Vec<String>>;

    /// Translate a single text
    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        self.translate_batch(&[text.to_string()], source, target)?
            .pop()
            .ok_or_else(|| ResepError::UnexpectedResponse("empty translation".to_string()))
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn translate_batch(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Result<Vec<String>> {
        (**self).translate_batch(texts, source, target)
    }
}

/// Check that a provider answered with one translation per input.
pub(crate) fn ensure_same_length(
    provider: &str,
    expected: usize,
    translations: Vec<String>,
) -> Result<Vec<String>> {
    if translations.len() != expected {
        return Err(ResepError::UnexpectedResponse(format!(
            "{} returned {} translations for {} texts",
            provider,
            translations.len(),
            expected
        )));
    }
    Ok(translations)
}

use crate::cache::{Clock, TtlCache};
use crate::error::Result;
use crate::translators::{Language, Translator};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Batch translations keyed by texts and language pair
type TranslationCache = TtlCache<(Vec<String>, Language, Language), Vec<String>>;

/// Translator decorator that remembers successful translations for a fixed time.
pub struct CachingTranslator<T> {
    inner: T,
    cache: TranslationCache,
}

impl<T: Translator> CachingTranslator<T> {
    pub fn new(inner: T, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            cache: TtlCache::with_clock(ttl, clock),
        }
    }
}

impl<T: Translator> Translator for CachingTranslator<T> {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    fn translate_batch(
        &self,
        texts: &[String],
        source: Language,
        target: Language,
    ) -> Result<Vec<String>> {
        let key = (texts.to_vec(), source, target);
        self.cache.get_or_try_insert_with(key, || {
            debug!(
                "CACHE MISS: translating {} texts {} -> {} with {}",
                texts.len(),
                source.code(),
                target.code(),
                self.inner.provider_name()
            );
            self.inner.translate_batch(texts, source, target)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::ResepError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Translator for Counting {
        fn provider_name(&self) -> &str {
            "counting"
        }

        fn translate_batch(
            &self,
            texts: &[String],
            _source: Language,
            _target: Language,
        ) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ResepError::Translation("offline".to_string()));
            }
            Ok(texts.iter().map(|t| format!("{}!", t)).collect())
        }
    }

    fn caching(fail: bool) -> (CachingTranslator<Counting>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let translator = CachingTranslator::new(
            Counting {
                calls: AtomicUsize::new(0),
                fail,
            },
            Duration::from_secs(3600),
            clock.clone(),
        );
        (translator, clock)
    }

    #[test]
    fn test_repeated_translation_hits_cache() {
        let (translator, _clock) = caching(false);
        for _ in 0..3 {
            let text = translator
                .translate("tempe", Language::Indonesian, Language::English)
                .unwrap();
            assert_eq!(text, "tempe!");
        }
        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_language_pair_is_part_of_key() {
        let (translator, _clock) = caching(false);
        translator
            .translate("tempe", Language::Indonesian, Language::English)
            .unwrap();
        translator
            .translate("tempe", Language::English, Language::Indonesian)
            .unwrap();
        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_expired_translation_is_refetched() {
        let (translator, clock) = caching(false);
        translator
            .translate("tempe", Language::Indonesian, Language::English)
            .unwrap();
        clock.advance(Duration::from_secs(3601));
        translator
            .translate("tempe", Language::Indonesian, Language::English)
            .unwrap();
        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failures_are_retried_on_next_call() {
        let (translator, _clock) = caching(true);
        assert!(translator
            .translate("tempe", Language::Indonesian, Language::English)
            .is_err());
        assert!(translator
            .translate("tempe", Language::Indonesian, Language::English)
            .is_err());
        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 2);
    }
}

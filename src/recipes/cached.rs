use crate::cache::{Clock, TtlCache};
use crate::error::Result;
use crate::model::{RecipeDetail, RecipeId};
use crate::recipes::RecipeSource;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Recipe source decorator that remembers successful searches and details.
pub struct CachingRecipeSource<S> {
    inner: S,
    searches: TtlCache<String, Vec<RecipeId>>,
    details: TtlCache<RecipeId, RecipeDetail>,
}

impl<S: RecipeSource> CachingRecipeSource<S> {
    pub fn new(inner: S, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            searches: TtlCache::with_clock(ttl, clock.clone()),
            details: TtlCache::with_clock(ttl, clock),
        }
    }
}

impl<S: RecipeSource> RecipeSource for CachingRecipeSource<S> {
    fn search(&self, ingredients: &str) -> Result<Vec<RecipeId>> {
        self.searches
            .get_or_try_insert_with(ingredients.to_string(), || {
                debug!("CACHE MISS: searching recipes for '{}'", ingredients);
                self.inner.search(ingredients)
            })
    }

    fn get_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
        self.details.get_or_try_insert_with(id, || {
            debug!("CACHE MISS: fetching recipe detail {}", id);
            self.inner.get_detail(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::ResepError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        searches: AtomicUsize,
        details: AtomicUsize,
    }

    impl RecipeSource for Counting {
        fn search(&self, ingredients: &str) -> Result<Vec<RecipeId>> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            if ingredients == "offline" {
                return Err(ResepError::UnexpectedResponse("offline".to_string()));
            }
            Ok(vec![RecipeId(1), RecipeId(2)])
        }

        fn get_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
            self.details.fetch_add(1, Ordering::SeqCst);
            Ok(RecipeDetail {
                title: format!("Recipe {}", id),
                source_url: String::new(),
                ingredients: Vec::new(),
                steps: Vec::new(),
            })
        }
    }

    fn caching() -> (CachingRecipeSource<Counting>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let source =
            CachingRecipeSource::new(Counting::default(), Duration::from_secs(3600), clock.clone());
        (source, clock)
    }

    #[test]
    fn test_search_is_cached_per_query() {
        let (source, _clock) = caching();
        source.search("beef").unwrap();
        source.search("beef").unwrap();
        source.search("garlic").unwrap();
        assert_eq!(source.inner.searches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_detail_is_cached_until_expiry() {
        let (source, clock) = caching();
        let first = source.get_detail(RecipeId(9)).unwrap();
        let second = source.get_detail(RecipeId(9)).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.inner.details.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_secs(3600));
        source.get_detail(RecipeId(9)).unwrap();
        assert_eq!(source.inner.details.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failed_search_is_not_cached() {
        let (source, _clock) = caching();
        assert!(source.search("offline").is_err());
        assert!(source.search("offline").is_err());
        assert_eq!(source.inner.searches.load(Ordering::SeqCst), 2);
    }
}

//! Ingredient search pipeline.
//!
//! ```text
//! Idle -> Translating -> Searching -> FetchingDetails -> Done
//!              |             |               |
//!              +-------------+---------------+--> Failed
//! ```
//!
//! Everything runs on the calling thread, one request at a time. Details
//! are fetched in the order the search returned them.

mod localize;

pub use localize::localize;

use crate::error::{ResepError, Result};
use crate::model::Recipe;
use crate::recipes::{RecipeSource, MAX_RESULTS};
use crate::translators::{Language, Translator};
use log::{error, info, warn};

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Translating,
    Searching,
    FetchingDetails,
    Done,
    Failed,
}

/// Receives progress updates while the pipeline runs.
pub trait ProgressReporter {
    /// Called on every stage change and after every detail request.
    /// `percent` never decreases during a run.
    fn progress(&mut self, state: PipelineState, percent: u8, message: &str);

    /// A failure the user should see that does not stop the run.
    fn alert(&mut self, _message: &str) {}
}

/// Reporter that ignores every update.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn progress(&mut self, _state: PipelineState, _percent: u8, _message: &str) {}
}

/// Remembers the last percentage so a failure can be reported without
/// moving the progress backwards.
struct Tracked<'a> {
    inner: &'a mut dyn ProgressReporter,
    percent: u8,
}

impl ProgressReporter for Tracked<'_> {
    fn progress(&mut self, state: PipelineState, percent: u8, message: &str) {
        self.percent = percent;
        self.inner.progress(state, percent, message);
    }

    fn alert(&mut self, message: &str) {
        self.inner.alert(message);
    }
}

/// Result of a run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search found nothing for the query
    NoMatches,
    /// Localized recipes, in search order
    Found(Vec<Recipe>),
}

const TRANSLATED_PERCENT: u8 = 10;
const SEARCHED_PERCENT: u8 = 35;
const DETAILS_SPAN: usize = 55;

/// Percentage reached after `done` of `total` detail requests.
fn detail_progress(done: usize, total: usize) -> u8 {
    let extra = if total == 0 { DETAILS_SPAN } else { done * DETAILS_SPAN / total };
    SEARCHED_PERCENT + extra as u8
}

/// Options that change how results are produced
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub translate_steps: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            translate_steps: true,
        }
    }
}

/// Sequences translation, search and detail fetching for one query.
///
/// Built once at start-up from long-lived services and reused for every
/// query. Nothing needs tearing down.
pub struct Pipeline<T, S> {
    translator: T,
    recipes: S,
    options: PipelineOptions,
}

impl<T: Translator, S: RecipeSource> Pipeline<T, S> {
    pub fn new(translator: T, recipes: S, options: PipelineOptions) -> Self {
        Self {
            translator,
            recipes,
            options,
        }
    }

    /// Run the whole pipeline for an Indonesian ingredient query.
    pub fn run(&self, query: &str, reporter: &mut dyn ProgressReporter) -> Result<SearchOutcome> {
        let mut tracked = Tracked {
            inner: reporter,
            percent: 0,
        };
        let result = self.run_stages(query, &mut tracked);
        match &result {
            Ok(_) => tracked.progress(PipelineState::Done, 100, "Selesai"),
            Err(e) => {
                error!("Search for '{}' failed: {}", query, e);
                let percent = tracked.percent;
                tracked.progress(PipelineState::Failed, percent, &e.to_string());
            }
        }
        result
    }

    fn run_stages(
        &self,
        query: &str,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResepError::EmptyQuery);
        }

        reporter.progress(PipelineState::Translating, 0, "Menerjemahkan bahan...");
        let translated = self
            .translator
            .translate(query, Language::Indonesian, Language::English)
            .map_err(|e| match e {
                ResepError::MissingCredentials(_) => e,
                other => ResepError::Translation(other.to_string()),
            })?;
        let translated = translated.trim();
        if translated.is_empty() {
            return Err(ResepError::Translation("empty translation".to_string()));
        }
        info!("Translated '{}' to '{}'", query, translated);

        reporter.progress(
            PipelineState::Searching,
            TRANSLATED_PERCENT,
            "Mencari resep berdasarkan bahan...",
        );
        let mut ids = match self.recipes.search(translated) {
            Ok(ids) => ids,
            Err(e @ ResepError::MissingCredentials(_)) => return Err(e),
            Err(e) => {
                error!("Recipe search failed: {}", e);
                reporter.alert(&format!("Gagal koneksi API pencarian: {}", e));
                Vec::new()
            }
        };
        ids.truncate(MAX_RESULTS);
        if ids.is_empty() {
            info!("No recipes found for '{}'", translated);
            return Ok(SearchOutcome::NoMatches);
        }

        reporter.progress(
            PipelineState::FetchingDetails,
            SEARCHED_PERCENT,
            "Mengambil detail resep...",
        );
        let total = ids.len();
        let mut recipes = Vec::with_capacity(total);
        for (index, id) in ids.into_iter().enumerate() {
            match self.recipes.get_detail(id) {
                Ok(detail) => recipes.push(localize(
                    detail,
                    &self.translator,
                    self.options.translate_steps,
                )),
                Err(e) => warn!("Skipping recipe {}: {}", id, e),
            }
            reporter.progress(
                PipelineState::FetchingDetails,
                detail_progress(index + 1, total),
                "Mengambil detail resep...",
            );
        }

        if recipes.is_empty() {
            return Err(ResepError::NoRecipeDetails { attempted: total });
        }
        info!("Found {} of {} recipes", recipes.len(), total);
        Ok(SearchOutcome::Found(recipes))
    }
}

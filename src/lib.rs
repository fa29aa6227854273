//! Find recipes for the ingredients you have, in Indonesian.
//!
//! An Indonesian ingredient list is translated to English, matched against
//! the Spoonacular recipe API, and the matching recipes are translated back
//! to Indonesian.
//!
//! ```no_run
//! use resep_pintar::{build_pipeline, AppConfig, SearchOutcome, SilentReporter};
//!
//! let config = AppConfig::load(None)?;
//! let pipeline = build_pipeline(&config)?;
//! if let SearchOutcome::Found(recipes) =
//!     pipeline.run("daging sapi, bawang putih", &mut SilentReporter)?
//! {
//!     for recipe in recipes {
//!         println!("{}", recipe.name());
//!     }
//! }
//! # Ok::<(), resep_pintar::ResepError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod recipes;
pub mod render;
pub mod translators;

use std::sync::Arc;

use reqwest::blocking::Client;

pub use config::AppConfig;
pub use error::{ResepError, Result};
pub use model::{Recipe, RecipeDetail, RecipeId};
pub use pipeline::{
    Pipeline, PipelineOptions, PipelineState, ProgressReporter, SearchOutcome, SilentReporter,
};

use crate::cache::SystemClock;
use crate::recipes::{CachingRecipeSource, SpoonacularClient};
use crate::translators::{CachingTranslator, Translator, TranslatorFactory};

/// Pipeline wired with the configured translator, Spoonacular and caching
pub type AppPipeline = Pipeline<
    CachingTranslator<Box<dyn Translator>>,
    CachingRecipeSource<SpoonacularClient>,
>;

/// Shared HTTP client used by every service
pub fn http_client(config: &AppConfig) -> Result<Client> {
    Ok(Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("resep-pintar/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Construct every service once and wire them into a pipeline.
///
/// Missing API keys do not fail here; the pipeline reports them when a
/// search is run.
pub fn build_pipeline(config: &AppConfig) -> Result<AppPipeline> {
    let client = http_client(config)?;
    let clock = Arc::new(SystemClock);

    let translator = CachingTranslator::new(
        TranslatorFactory::create(config, client.clone())?,
        config.cache_ttl(),
        clock.clone(),
    );

    let spoonacular = match config.spoonacular.base_url.clone() {
        Some(url) => SpoonacularClient::with_base_url(client, config.spoonacular_api_key(), url),
        None => SpoonacularClient::new(client, config.spoonacular_api_key()),
    };
    let recipes = CachingRecipeSource::new(spoonacular, config.cache_ttl(), clock);

    Ok(Pipeline::new(
        translator,
        recipes,
        PipelineOptions {
            translate_steps: config.translation.translate_steps,
        },
    ))
}

/// Search recipes with configuration loaded from files and environment.
///
/// # Example
/// ```no_run
/// let outcome = resep_pintar::search_recipes("tahu, tempe")?;
/// # Ok::<(), resep_pintar::ResepError>(())
/// ```
pub fn search_recipes(query: &str) -> Result<SearchOutcome> {
    let config = AppConfig::load(None)?;
    build_pipeline(&config)?.run(query, &mut SilentReporter)
}

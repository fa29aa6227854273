use crate::error::{ResepError, Result};
use crate::model::{RecipeDetail, RecipeId};
use crate::recipes::{RecipeSource, MAX_RESULTS};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;

const API_URL: &str = "https://api.spoonacular.com";
const SERVICE: &str = "Spoonacular";
const MISSING_TITLE: &str = "Judul Tidak Ditemukan";

#[derive(Deserialize)]
struct SearchHit {
    id: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    title: Option<String>,
    source_url: Option<String>,
    extended_ingredients: Option<Vec<ExtendedIngredient>>,
    analyzed_instructions: Option<Vec<InstructionSet>>,
}

#[derive(Deserialize)]
struct ExtendedIngredient {
    original: Option<String>,
}

#[derive(Deserialize)]
struct InstructionSet {
    steps: Option<Vec<InstructionStep>>,
}

#[derive(Deserialize)]
struct InstructionStep {
    step: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Spoonacular's public page for a recipe, used when it has no source URL.
fn fallback_url(title: &str, id: RecipeId) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("https://spoonacular.com/recipes/{}-{}", slug, id)
}

impl RecipeInformation {
    fn into_detail(self, id: RecipeId) -> RecipeDetail {
        let title = present(self.title).unwrap_or_else(|| MISSING_TITLE.to_string());
        let source_url = present(self.source_url).unwrap_or_else(|| fallback_url(&title, id));

        let ingredients = self
            .extended_ingredients
            .unwrap_or_default()
            .into_iter()
            .filter_map(|i| present(i.original))
            .collect();

        // Only the first instruction set is used
        let steps = self
            .analyzed_instructions
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|set| set.steps)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| present(s.step))
            .collect();

        RecipeDetail {
            title,
            source_url,
            ingredients,
            steps,
        }
    }
}

/// Blocking client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SpoonacularClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, API_URL.to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(client: Client, api_key: Option<String>, base_url: String) -> Self {
        SpoonacularClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(ResepError::MissingCredentials(SERVICE))
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    // Spoonacular answers 402 once the daily points are used up
    if status == StatusCode::PAYMENT_REQUIRED || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ResepError::QuotaExceeded(SERVICE));
    }
    if !status.is_success() {
        return Err(ResepError::Status {
            service: SERVICE,
            status,
        });
    }
    Ok(response)
}

impl RecipeSource for SpoonacularClient {
    fn search(&self, ingredients: &str) -> Result<Vec<RecipeId>> {
        let api_key = self.api_key()?;
        debug!("Searching recipes for '{}'", ingredients);

        let number = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[
                ("ingredients", ingredients),
                ("number", number.as_str()),
                ("apiKey", api_key),
                ("ranking", "1"),
            ])
            .send()?;

        let hits: Vec<SearchHit> = check_status(response)?.json()?;
        Ok(hits
            .into_iter()
            .filter_map(|hit| hit.id.map(RecipeId))
            .take(MAX_RESULTS)
            .collect())
    }

    fn get_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
        let api_key = self.api_key()?;
        debug!("Fetching recipe detail {}", id);

        let response = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("apiKey", api_key), ("includeNutrition", "false")])
            .send()?;

        let information: RecipeInformation = check_status(response)?.json()?;
        Ok(information.into_detail(id))
    }
}

mod cached;
mod spoonacular;

pub use cached::CachingRecipeSource;
pub use spoonacular::SpoonacularClient;

use crate::error::Result;
use crate::model::{RecipeDetail, RecipeId};

/// Maximum number of recipes returned by a search
pub const MAX_RESULTS: usize = 5;

/// A recipe search service
pub trait RecipeSource: Send + Sync {
    /// Find up to [`MAX_RESULTS`] recipes using the given English ingredients.
    fn search(&self, ingredients: &str) -> Result<Vec<RecipeId>>;

    /// Fetch the English details of one recipe.
    fn get_detail(&self, id: RecipeId) -> Result<RecipeDetail>;
}

impl<T: RecipeSource + ?Sized> RecipeSource for Box<T> {
    fn search(&self, ingredients: &str) -> Result<Vec<RecipeId>> {
        (**self).search(ingredients)
    }

    fn get_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
        (**self).get_detail(id)
    }
}

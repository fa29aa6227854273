use crate::model::{Recipe, RecipeDetail};
use crate::translators::{Language, Translator};
use log::warn;

/// Translate a recipe detail into Indonesian.
///
/// Title, ingredients and (when `translate_steps` is set) steps go to the
/// translator as a single batch laid out as `[title, ingredients.., steps..]`.
/// If the batch fails the English text is kept.
pub fn localize(detail: RecipeDetail, translator: &dyn Translator, translate_steps: bool) -> Recipe {
    let RecipeDetail {
        title,
        source_url,
        ingredients,
        steps,
    } = detail;

    let mut batch = Vec::with_capacity(1 + ingredients.len() + steps.len());
    batch.push(title.clone());
    batch.extend(ingredients.iter().cloned());
    if translate_steps {
        batch.extend(steps.iter().cloned());
    }

    match translator.translate_batch(&batch, Language::English, Language::Indonesian) {
        Ok(mut translated) if translated.len() == batch.len() => {
            let translated_steps = translated.split_off(1 + ingredients.len());
            let translated_ingredients = translated.split_off(1);
            let name = translated.pop().unwrap_or(title);
            let steps = if translate_steps { translated_steps } else { steps };
            Recipe::new(name, source_url, translated_ingredients, steps)
        }
        Ok(translated) => {
            warn!(
                "Keeping '{}' untranslated: got {} translations for {} texts",
                title,
                translated.len(),
                batch.len()
            );
            Recipe::new(title, source_url, ingredients, steps)
        }
        Err(e) => {
            warn!("Keeping '{}' untranslated: {}", title, e);
            Recipe::new(title, source_url, ingredients, steps)
        }
    }
}

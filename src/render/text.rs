use crate::error::Result;
use crate::model::Recipe;
use crate::pipeline::SearchOutcome;
use crate::render::pages::{self, HOME_METRICS};
use crate::render::{notice_for, Level, Renderer};

/// Plain text output for the terminal
#[derive(Debug, Default)]
pub struct TextRenderer;

fn heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("{}\n", underline.to_string().repeat(title.chars().count())));
}

fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Success => "[OK]",
        Level::Info => "[i]",
        Level::Warning => "[!]",
        Level::Error => "[x]",
    }
}

fn recipe(out: &mut String, recipe: &Recipe) {
    out.push('\n');
    heading(out, recipe.name(), '-');
    out.push_str("Bahan-bahan:\n");
    for ingredient in recipe.ingredients() {
        out.push_str(&format!("  - {}\n", ingredient));
    }
    out.push_str("Langkah-langkah:\n");
    for (i, step) in recipe.steps().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    out.push_str(&format!("Lihat resep asli: {}\n", recipe.source_url()));
}

impl Renderer for TextRenderer {
    fn home(&self) -> String {
        let mut out = String::new();
        heading(&mut out, pages::APP_NAME, '=');
        out.push_str(&format!("{}\n\n", pages::HOME_INTRO));
        heading(&mut out, pages::HOME_FACTS_TITLE, '-');
        out.push_str(&format!("{}\n\n", pages::HOME_FACTS_INTRO));
        for metric in HOME_METRICS.iter() {
            out.push_str(&format!(
                "  {:<22} {:>10}  {}\n",
                metric.label, metric.value, metric.caption
            ));
        }
        out
    }

    fn about(&self) -> String {
        let mut out = String::new();
        heading(&mut out, pages::ABOUT_TITLE, '=');
        for paragraph in pages::ABOUT_BODY.iter() {
            out.push_str(&format!("{}\n\n", paragraph));
        }
        heading(&mut out, pages::TECH_TITLE, '-');
        for (label, value) in pages::TECH_STACK.iter() {
            out.push_str(&format!("  * {}: {}\n", label, value));
        }
        out
    }

    fn search_results(&self, query: &str, result: &Result<SearchOutcome>) -> String {
        let mut out = String::new();
        let notice = notice_for(query, result);
        out.push_str(&format!("{} {}\n", level_prefix(notice.level), notice.text));
        if query.trim().is_empty() {
            out.push_str(&format!("    {}\n", pages::SEARCH_HINT));
        }
        if let Ok(SearchOutcome::Found(recipes)) = result {
            for r in recipes {
                recipe(&mut out, r);
            }
        }
        out
    }
}

mod html;
pub mod pages;
mod progress;
mod text;

pub use html::HtmlRenderer;
pub use progress::TerminalReporter;
pub use text::TextRenderer;

use crate::error::{ResepError, Result};
use crate::pipeline::SearchOutcome;

/// How prominent a message is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// A message shown above the search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Describe the result of a search run to the user.
pub fn notice_for(query: &str, result: &Result<SearchOutcome>) -> Notice {
    match result {
        Ok(SearchOutcome::Found(recipes)) => Notice::new(
            Level::Success,
            format!("Ditemukan {} resep teratas!", recipes.len()),
        ),
        Ok(SearchOutcome::NoMatches) => Notice::new(
            Level::Info,
            format!("Tidak ada hasil untuk '{}'. Coba bahan lain.", query.trim()),
        ),
        Err(ResepError::EmptyQuery) => Notice::new(
            Level::Warning,
            "Mohon masukkan nama bahan terlebih dahulu.",
        ),
        Err(ResepError::MissingCredentials(service)) => Notice::new(
            Level::Error,
            format!("API Key {} belum diatur di secrets.toml", service),
        ),
        Err(ResepError::Translation(_)) => {
            Notice::new(Level::Error, "Proses terjemahan gagal. Coba lagi.")
        }
        Err(ResepError::NoRecipeDetails { .. }) => {
            Notice::new(Level::Error, "Gagal mengambil detail resep.")
        }
        Err(e) => Notice::new(Level::Error, format!("Terjadi kesalahan: {}", e)),
    }
}

/// Turns pages and search results into a printable document.
pub trait Renderer {
    fn home(&self) -> String;

    fn about(&self) -> String;

    fn search_results(&self, query: &str, result: &Result<SearchOutcome>) -> String;
}

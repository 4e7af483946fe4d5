//! Output record model for scraped listing entries.

use serde::Serialize;

/// Top-level content category. Both are scraped identically, from their
/// own base URL, into their own dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anime,
    Manga,
}

impl Category {
    /// Scrape order: anime first, then manga.
    pub const ALL: [Category; 2] = [Category::Anime, Category::Manga];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Anime => "anime",
            Category::Manga => "manga",
        }
    }
}

/// One scraped listing entry, tagged with the category and genre id it was
/// fetched under. Field order here is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRecord {
    pub title: String,
    pub genres: String,
    pub description: String,
    pub category: Category,
    pub genre_id: u32,
}

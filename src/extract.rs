//! Per-page record extraction.
//!
//! Locates listing entries by their structural marker (`div.seasonal-anime`)
//! and pulls three fields per entry, substituting fixed placeholders when a
//! field is absent from the markup.

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

use crate::record::{Category, GenreRecord};

/// Substituted when an entry has no title element.
pub const FALLBACK_TITLE: &str = "Unknown Title";

/// Substituted when an entry has no description element.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// One listing entry before category/genre tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub title: String,
    /// Genre labels joined with `", "`; empty when the entry has none.
    pub genres: String,
    pub description: String,
}

impl PageEntry {
    /// Tag this entry with the loop parameters it was fetched under.
    pub fn into_record(self, category: Category, genre_id: u32) -> GenreRecord {
        GenreRecord {
            title: self.title,
            genres: self.genres,
            description: self.description,
            category,
            genre_id,
        }
    }
}

/// HTML extractor with pre-parsed selectors for the MAL listing markup.
pub struct Extractor {
    entry: Selector,
    title: Selector,
    genre: Selector,
    description: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entry: parse_selector("div.seasonal-anime")?,
            title: parse_selector("a.link-title")?,
            genre: parse_selector("span.genre")?,
            description: parse_selector("p.preline")?,
        })
    }

    /// Extract all listing entries from one page of markup, in document order.
    ///
    /// Never fails: pages without entries yield an empty vec, and absent
    /// fields degrade to placeholders.
    pub fn parse_page(&self, html: &str) -> Vec<PageEntry> {
        let document = Html::parse_document(html);

        document
            .select(&self.entry)
            .map(|entry| {
                let title = entry
                    .select(&self.title)
                    .next()
                    .map(element_text)
                    .unwrap_or_else(|| FALLBACK_TITLE.to_string());

                let genres = entry
                    .select(&self.genre)
                    .map(element_text)
                    .collect::<Vec<_>>()
                    .join(", ");

                let description = entry
                    .select(&self.description)
                    .next()
                    .map(element_text)
                    .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

                PageEntry {
                    title,
                    genres,
                    description,
                }
            })
            .collect()
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

// Selector parse errors borrow the input, so they are flattened into a
// message here instead of propagated as-is.
fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{}`: {}", css, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    fn page(entries: &[String]) -> String {
        format!("<html><body>{}</body></html>", entries.join("\n"))
    }

    fn entry(title: Option<&str>, genres: &[&str], description: Option<&str>) -> String {
        let mut html = String::from("<div class=\"seasonal-anime\">");
        if let Some(title) = title {
            html.push_str(&format!("<a class=\"link-title\" href=\"#\">{}</a>", title));
        }
        for genre in genres {
            html.push_str(&format!("<span class=\"genre\">{}</span>", genre));
        }
        if let Some(description) = description {
            html.push_str(&format!("<p class=\"preline\">{}</p>", description));
        }
        html.push_str("</div>");
        html
    }

    #[test]
    fn test_full_entry() {
        let html = page(&[entry(Some("Cowboy Bebop"), &["Action", "Sci-Fi"], Some("Space bounty hunters."))]);
        let entries = extractor().parse_page(&html);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Cowboy Bebop");
        assert_eq!(entries[0].genres, "Action, Sci-Fi");
        assert_eq!(entries[0].description, "Space bounty hunters.");
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let html = page(&[entry(None, &[], None)]);
        let entries = extractor().parse_page(&html);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, FALLBACK_TITLE);
        assert_eq!(entries[0].genres, "");
        assert_eq!(entries[0].description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_page_without_entries_is_empty() {
        let entries = extractor().parse_page("<html><body><p>Nothing here</p></body></html>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entries_in_document_order() {
        let html = page(&[
            entry(Some("First"), &["A"], Some("d1")),
            entry(Some("Second"), &["B"], Some("d2")),
            entry(Some("Third"), &[], None),
        ]);
        let entries = extractor().parse_page(&html);

        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_text_is_trimmed() {
        let html = page(&[entry(Some("  Padded Title \n"), &[" Drama "], Some("\n  padded  "))]);
        let entries = extractor().parse_page(&html);

        assert_eq!(entries[0].title, "Padded Title");
        assert_eq!(entries[0].genres, "Drama");
        assert_eq!(entries[0].description, "padded");
    }

    #[test]
    fn test_into_record_tags_entry() {
        let record = PageEntry {
            title: "A".to_string(),
            genres: "G1, G2".to_string(),
            description: "D1".to_string(),
        }
        .into_record(Category::Anime, 7);

        assert_eq!(record.category, Category::Anime);
        assert_eq!(record.genre_id, 7);
        assert_eq!(record.title, "A");
    }
}

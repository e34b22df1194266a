//! Case-insensitive list filtering.
//!
//! A record matches a query when any of its searchable text fields contains
//! the query, ignoring case, or when its numeric id, printed in decimal,
//! equals the query exactly. The id match is an equality test, never a
//! substring test: `"2"` matches surah 2 but not surah 12.
//!
//! The query is matched as given, surrounding whitespace included. A blank
//! query returns every record in its original order.

use crate::catalog::{AsmaulHusna, DailyPrayer};
use crate::provider::SurahSummary;

/// A record that can be matched against a search query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Numeric id matched by exact equality, if the record has one.
    fn search_id(&self) -> Option<u32> {
        None
    }
}

/// Returns the records matching `query`, in their original order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, query, &needle))
        .collect()
}

/// Whether `record` matches `query`; `needle` is its lowercase form.
fn matches<T: Searchable>(record: &T, query: &str, needle: &str) -> bool {
    if let Some(id) = record.search_id() {
        if id.to_string() == query {
            return true;
        }
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

impl Searchable for SurahSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.transliteration.id.as_str(),
            self.name.transliteration.en.as_str(),
            self.name.translation.id.as_str(),
            self.name.translation.en.as_str(),
        ]
    }

    fn search_id(&self) -> Option<u32> {
        Some(self.number.into())
    }
}

impl Searchable for AsmaulHusna {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.latin.as_str(),
            self.meaning_id.as_str(),
            self.meaning_en.as_str(),
        ]
    }

    fn search_id(&self) -> Option<u32> {
        Some(self.index.into())
    }
}

impl Searchable for DailyPrayer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title_id, self.title_en]
    }
}

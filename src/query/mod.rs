//! Search and sort over fetched collections.
//!
//! Everything here is pure and synchronous. Results borrow from the source
//! slice, so the cached collection is never reordered or copied.

mod search;
mod sort;

use std::borrow::Cow;

use crate::models::{InventionSummary, Pattern, TimelineEntry};

pub use search::search;
pub use sort::{sort_by_year, SortOrder};

/// Text fields a record exposes to substring search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Records that carry a year for chronological ordering.
pub trait Dated {
    fn year(&self) -> Option<i32>;
}

impl Searchable for InventionSummary {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.summary.as_str())]
    }
}

impl Dated for InventionSummary {
    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl Searchable for Pattern {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = Vec::with_capacity(2 + self.inventions.len());
        fields.push(Cow::Borrowed(self.pattern_type.as_str()));
        fields.push(Cow::Borrowed(self.description.as_str()));
        fields.extend(self.inventions.iter().map(|name| Cow::Borrowed(name.as_str())));
        fields
    }
}

impl Searchable for TimelineEntry {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.invention.as_str()),
            Cow::Borrowed(self.key_discovery.as_str()),
            Cow::Owned(self.year.to_string()),
        ]
    }
}

impl Dated for TimelineEntry {
    fn year(&self) -> Option<i32> {
        Some(self.year)
    }
}

/// Search first, then sort. Recomputed in full on every call.
pub fn search_and_sort<'a, T>(items: &'a [T], raw_query: &str, order: SortOrder) -> Vec<&'a T>
where
    T: Searchable + Dated,
{
    sort_by_year(search(items, raw_query), order)
}

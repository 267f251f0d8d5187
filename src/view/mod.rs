//! Bounded preview slices for summary panels, full slices for browse screens.

pub const RECENT_INVENTIONS_PREVIEW: usize = 3;
pub const PATTERNS_PREVIEW: usize = 3;
pub const TIMELINE_PREVIEW: usize = 4;

/// Invention badges shown per pattern card.
pub const PATTERN_BADGES_PREVIEW: usize = 3;
pub const PATTERN_BADGES_BROWSE: usize = 4;

/// A run of records to render plus the size of what it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<'a, T> {
    pub items: Vec<&'a T>,
    pub total: usize,
}

impl<'a, T> Slice<'a, T> {
    pub fn has_more(&self) -> bool {
        self.total > self.items.len()
    }

    pub fn hidden(&self) -> usize {
        self.total.saturating_sub(self.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// First `limit` records, order untouched.
pub fn preview<T>(mut items: Vec<&T>, limit: usize) -> Slice<'_, T> {
    let total = items.len();
    items.truncate(limit);
    Slice { items, total }
}

pub fn full<T>(items: Vec<&T>) -> Slice<'_, T> {
    let total = items.len();
    Slice { items, total }
}

/// Preview straight off an owned collection.
pub fn preview_of<T>(items: &[T], limit: usize) -> Slice<'_, T> {
    preview(items.iter().collect(), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::entry;
    use crate::query::{search_and_sort, SortOrder};

    #[test]
    fn test_preview_is_prefix_with_true_total() {
        let names: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();

        let slice = preview_of(&names, RECENT_INVENTIONS_PREVIEW);
        assert_eq!(slice.len(), 3);
        assert_eq!(slice.total, 5);
        assert!(slice.has_more());
        assert_eq!(slice.hidden(), 2);
        let shown: Vec<_> = slice.items.iter().map(|s| s.as_str()).collect();
        assert_eq!(shown, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        let names = vec!["only".to_string()];
        let slice = preview_of(&names, TIMELINE_PREVIEW);
        assert_eq!(slice.len(), 1);
        assert!(!slice.has_more());
        assert_eq!(slice.hidden(), 0);

        let empty: Vec<String> = Vec::new();
        let slice = preview_of(&empty, PATTERNS_PREVIEW);
        assert!(slice.is_empty());
        assert_eq!(slice.total, 0);
    }

    #[test]
    fn test_preview_of_sorted_result_is_prefix() {
        let entries = vec![
            entry(1895, "X-ray", "Glow"),
            entry(1945, "Microwave Oven", "Magnetron"),
            entry(1928, "Penicillin", "Mould"),
            entry(1941, "Velcro", "Burrs"),
            entry(1958, "Pacemaker", "Resistor"),
        ];

        let sorted = search_and_sort(&entries, "", SortOrder::Descending);
        let slice = preview(sorted.clone(), TIMELINE_PREVIEW);
        assert_eq!(slice.items, sorted[..TIMELINE_PREVIEW].to_vec());
        assert_eq!(slice.total, 5);

        let all = full(sorted.clone());
        assert_eq!(all.len(), 5);
        assert!(!all.has_more());
    }
}

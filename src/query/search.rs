use super::Searchable;

/// A normalised search term: trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Keep every record with at least one field containing the query.
///
/// Membership only: no ranking, source order preserved.
pub fn search<'a, T: Searchable>(items: &'a [T], raw_query: &str) -> Vec<&'a T> {
    let query = Query::new(raw_query);
    items.iter().filter(|item| query.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::*;

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let list = inventions();
        for raw in ["", "   ", "\t\n"] {
            let ids: Vec<_> = search(&list, raw).iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let list = inventions();
        let found = search(&list, "  MAGNETRON ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Microwave Oven");
    }

    #[test]
    fn test_results_contain_query_and_nothing_matching_is_dropped() {
        let list = vec![
            invention(1, "Velcro", Some(1941), "Burrs stuck to a dog"),
            invention(2, "Pacemaker", Some(1958), "A wrong resistor"),
            invention(3, "Post-it Notes", None, "Glue that would not stick"),
            invention(4, "X-ray", Some(1895), "A glowing screen"),
        ];

        for raw in ["st", "o", "glue", "zzz", "A"] {
            let query = Query::new(raw);
            let found = search(&list, raw);

            for item in &found {
                let hit = item.name.to_lowercase().contains(query.as_str())
                    || item.summary.to_lowercase().contains(query.as_str());
                assert!(hit, "{} should contain {raw:?}", item.name);
            }

            let expected = list
                .iter()
                .filter(|i| {
                    i.name.to_lowercase().contains(query.as_str())
                        || i.summary.to_lowercase().contains(query.as_str())
                })
                .count();
            assert_eq!(found.len(), expected, "query {raw:?}");
        }
    }

    #[test]
    fn test_no_match() {
        let list = inventions();
        assert!(search(&list, "velcro").is_empty());
    }
}

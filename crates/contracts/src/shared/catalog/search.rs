/// Types whose records can be matched against a free-text search term
pub trait Searchable {
    /// Fields searched, in display order (name before address, and so on)
    fn searchable_fields(&self) -> Vec<&str>;

    /// Lower-cased copy of the searchable fields, rebuilt on every call
    fn search_index(&self) -> SearchIndex {
        SearchIndex::new(&self.searchable_fields())
    }

    /// Case-insensitive substring match against any single field
    fn matches_filter(&self, search_term: &str) -> bool {
        search_term.is_empty() || self.search_index().contains(&search_term.to_lowercase())
    }
}

/// Ephemeral lower-cased view of one record's searchable fields.
///
/// Fields are kept apart so a term never matches across a field boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    fields: Vec<String>,
}

impl SearchIndex {
    pub fn new(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_lowercase()).collect(),
        }
    }

    /// `needle` must already be lower-cased
    pub fn contains(&self, needle: &str) -> bool {
        self.fields.iter().any(|field| field.contains(needle))
    }
}

/// Returns the records matching `search_term`, preserving their order.
///
/// The empty string is the identity filter. A term is not trimmed, so `" "`
/// only matches fields that contain a space.
pub fn filter<R: Searchable + Clone>(records: &[R], search_term: &str) -> Vec<R> {
    if search_term.is_empty() {
        return records.to_vec();
    }

    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| record.search_index().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        address: &'static str,
    }

    impl Searchable for Row {
        fn searchable_fields(&self) -> Vec<&str> {
            vec![self.name, self.address]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Juan dela Cruz", address: "123 Main St, Purok 1" },
            Row { name: "Maria Santos", address: "456 Oak Ave, Purok 2" },
            Row { name: "Pedro Reyes", address: "789 Pine Rd, Purok 3" },
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        assert_eq!(filter(&rows(), ""), rows());
    }

    #[test]
    fn test_case_insensitive_match() {
        let found = filter(&rows(), "pEdRo");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pedro Reyes");
    }

    #[test]
    fn test_matches_any_field_and_keeps_order() {
        let found = filter(&rows(), "purok");
        assert_eq!(found, rows());

        let found = filter(&rows(), "oak");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Maria Santos");
    }

    #[test]
    fn test_no_match_across_field_boundary() {
        // "Cruz" ends the name and "123" starts the address
        assert!(filter(&rows(), "cruz123").is_empty());
        assert!(filter(&rows(), "cruz 123").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for term in ["", "a", "purok 2", "zzz", " "] {
            let once = filter(&rows(), term);
            let twice = filter(&once, term);
            assert_eq!(once, twice, "term {:?}", term);
        }
    }

    #[test]
    fn test_whitespace_term_is_not_trimmed() {
        let found = filter(&rows(), "   ");
        assert!(found.is_empty());
    }

    #[test]
    fn test_matches_filter_agrees_with_filter() {
        let all = rows();
        for term in ["juan", "PINE", "", "xyz"] {
            let expected: Vec<Row> = all.iter().filter(|r| r.matches_filter(term)).cloned().collect();
            assert_eq!(filter(&all, term), expected);
        }
    }
}

//! Client-side list filtering shared by every table view.

/// Exposes the text fields a list row is searched by.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match over the searchable fields. The query is used verbatim,
/// surrounding whitespace included; an empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}

/// Exact match for select-style filters; an empty selection or `all` matches anything.
pub fn matches_select(value: &str, selected: &str) -> bool {
    let selected = selected.trim();
    selected.is_empty() || selected.eq_ignore_ascii_case("all") || value.eq_ignore_ascii_case(selected)
}

/// Sorted, de-duplicated non-empty values, used to populate select filters.
pub fn distinct_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.email]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Asha Rao", email: "asha@example.com" },
            Row { name: "Ravi Kumar", email: "ravi@corp.io" },
            Row { name: "Meera", email: "MEERA@EXAMPLE.COM" },
        ]
    }

    #[test]
    fn query_matches_any_field_case_insensitively() {
        let found = filter_by_query(&rows(), "Example");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Asha Rao");
        assert_eq!(found[1].name, "Meera");
    }

    #[test]
    fn filtered_rows_are_exactly_the_matching_rows() {
        let all = rows();
        for query in ["a", "RAVI", "corp", "zzz", " rao", " rao ", "ha r"] {
            let found = filter_by_query(&all, query);
            let expected: Vec<Row> = all
                .iter()
                .filter(|row| {
                    let q = query.to_lowercase();
                    row.name.to_lowercase().contains(&q) || row.email.to_lowercase().contains(&q)
                })
                .cloned()
                .collect();
            assert_eq!(found, expected, "query {:?}", query);
        }
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(filter_by_query(&rows(), "").len(), 3);
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_query() {
        let found = filter_by_query(&rows(), " rao");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Asha Rao");
        assert!(filter_by_query(&rows(), " rao ").is_empty());
        assert!(filter_by_query(&rows(), "   ").is_empty());
    }

    #[test]
    fn select_filter_treats_blank_and_all_as_wildcards() {
        assert!(matches_select("Pending", ""));
        assert!(matches_select("Pending", "all"));
        assert!(matches_select("Pending", "pending"));
        assert!(!matches_select("Processed", "Pending"));
    }

    #[test]
    fn distinct_values_sorts_and_dedups() {
        let values = distinct_values(["Sales", "", "Engineering", "Sales"]);
        assert_eq!(values, vec!["Engineering".to_string(), "Sales".to_string()]);
    }
}

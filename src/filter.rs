//! Filter/query engine
//!
//! Derives the visible subset of the catalog from the search text and the
//! monospaced-only toggle. A linear scan per keystroke is fast enough for
//! catalogs of a few thousand faces.

use crate::catalog::{Catalog, FontRecord};

/// The user's current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontQuery {
    pub text: String,
    pub monospaced_only: bool,
}

impl FontQuery {
    pub fn new(text: impl Into<String>, monospaced_only: bool) -> Self {
        Self {
            text: text.into(),
            monospaced_only,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && !self.monospaced_only
    }
}

/// Query with the needle folded once up front.
struct Matcher {
    needle: String,
    monospaced_only: bool,
}

impl Matcher {
    fn new(query: &FontQuery) -> Self {
        Self {
            needle: query.text.to_lowercase(),
            monospaced_only: query.monospaced_only,
        }
    }

    fn matches(&self, record: &FontRecord) -> bool {
        if self.monospaced_only && !record.is_monospaced {
            return false;
        }
        if self.needle.is_empty() {
            return true;
        }

        [
            &record.family_name,
            &record.display_name,
            &record.postscript_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Records of `catalog` matching `query` and the monospaced flag, in
/// catalog order.
pub fn filter<'a>(
    catalog: &'a Catalog,
    query: &str,
    monospaced_only: bool,
) -> Vec<&'a FontRecord> {
    let matcher = Matcher::new(&FontQuery::new(query, monospaced_only));
    catalog
        .iter()
        .filter(|record| matcher.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{record, sample_catalog};

    fn names<'a>(records: &[&'a FontRecord]) -> Vec<&'a str> {
        records
            .iter()
            .map(|record| record.postscript_name.as_str())
            .collect()
    }

    fn larger_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("Arial", "Arial", "ArialMT", false),
            record("Arial", "Arial Bold", "Arial-BoldMT", false),
            record("Courier", "Courier New", "CourierNewPSMT", true),
            record("Fira Code", "Fira Code Retina", "FiraCode-Retina", true),
            record("Menlo", "Menlo Regular", "Menlo-Regular", true),
            record("Unknown", "Mystery", "Mystery-Regular", false),
        ])
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = larger_catalog();
        let result = filter(&catalog, "", false);
        let expected: Vec<&FontRecord> = catalog.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_query_matches_any_name_field_case_insensitively() {
        let catalog = larger_catalog();

        // family name
        assert_eq!(names(&filter(&catalog, "FIRA", false)), vec!["FiraCode-Retina"]);
        // display name only
        assert_eq!(names(&filter(&catalog, "retina", false)), vec!["FiraCode-Retina"]);
        // postscript name only
        assert_eq!(
            names(&filter(&catalog, "boldmt", false)),
            vec!["Arial-BoldMT"]
        );
    }

    #[test]
    fn test_matches_are_sound_and_complete() {
        let catalog = larger_catalog();
        for query in ["a", "r", "mt", "regular", "co", "x"] {
            let result = filter(&catalog, query, false);
            let needle = query.to_lowercase();
            let hit = |record: &FontRecord| {
                [
                    &record.family_name,
                    &record.display_name,
                    &record.postscript_name,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            };

            for record in &result {
                assert!(hit(record), "{} should not match {:?}", record.postscript_name, query);
            }
            for record in catalog.iter().filter(|r| !result.contains(r)) {
                assert!(!hit(record), "{} should match {:?}", record.postscript_name, query);
            }
        }
    }

    #[test]
    fn test_monospaced_only_is_a_subset() {
        let catalog = larger_catalog();
        for query in ["", "a", "code", "menlo", "arial"] {
            let all = filter(&catalog, query, false);
            let mono = filter(&catalog, query, true);
            assert!(mono.iter().all(|record| all.contains(record)));
            assert!(mono.iter().all(|record| record.is_monospaced));
        }
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = larger_catalog();
        let result = filter(&catalog, "r", false);
        assert!(result
            .windows(2)
            .all(|pair| pair[0].catalog_cmp(pair[1]).is_lt()));
    }

    #[test]
    fn test_sample_scenario_queries() {
        let catalog = sample_catalog();
        assert_eq!(names(&filter(&catalog, "cour", false)), vec!["CourierNewPSMT"]);
        assert_eq!(names(&filter(&catalog, "", true)), vec!["CourierNewPSMT"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "zzz", false).is_empty());
        assert!(filter(&catalog, "zzz", true).is_empty());
    }

    #[test]
    fn test_unknown_sentinel_is_searchable() {
        let catalog = larger_catalog();
        assert_eq!(names(&filter(&catalog, "unknown", false)), vec!["Mystery-Regular"]);
    }

    #[test]
    fn test_query_is_empty_only_without_text_and_flag() {
        assert!(FontQuery::default().is_empty());
        assert!(!FontQuery::new("Arial", false).is_empty());
        assert!(!FontQuery::new("", true).is_empty());
    }
}

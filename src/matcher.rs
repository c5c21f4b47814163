use std::collections::BTreeMap;
use tracing::debug;

use crate::model::{Group, GroupReport};
use crate::properties::extract;
use crate::tags::TagFilter;

/// Returns true when every filter pair is present verbatim in `tags`.
///
/// Extra tags on the group never disqualify it, and an empty filter
/// matches everything.
pub fn tags_match(tags: &BTreeMap<String, String>, filter: &TagFilter) -> bool {
    filter
        .iter()
        .all(|(key, value)| tags.get(key).is_some_and(|v| v == value))
}

/// Selects the groups whose tags are a superset of `filter` and extracts
/// their properties, keeping the fetcher's ordering.
pub fn match_groups(groups: &[Group], filter: &TagFilter) -> Vec<GroupReport> {
    groups
        .iter()
        .filter(|group| {
            let matched = tags_match(&group.tags, filter);
            debug!(group = %group.name, matched, "Evaluated tag filter");
            matched
        })
        .map(extract)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[(&str, &str)]) -> BTreeMap<String, String> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn filter(items: &[(&str, &str)]) -> TagFilter {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn group(name: &str, items: &[(&str, &str)]) -> Group {
        Group {
            name: name.to_string(),
            tags: tags(items),
            ..Default::default()
        }
    }

    #[test]
    fn test_subset_matches_and_extra_tags_are_ignored() {
        let g1 = tags(&[("env", "prod"), ("team", "core")]);
        assert!(tags_match(&g1, &filter(&[("env", "prod")])));
        assert!(tags_match(&g1, &filter(&[("env", "prod"), ("team", "core")])));
    }

    #[test]
    fn test_missing_key_does_not_match() {
        let g1 = tags(&[("env", "prod"), ("team", "core")]);
        assert!(!tags_match(
            &g1,
            &filter(&[("env", "prod"), ("region", "us")])
        ));
    }

    #[test]
    fn test_values_compare_exactly() {
        let g = tags(&[("env", "Prod")]);
        assert!(!tags_match(&g, &filter(&[("env", "prod")])));
        assert!(!tags_match(&g, &filter(&[("env", "Prod ")])));
        assert!(tags_match(&g, &filter(&[("env", "Prod")])));
    }

    #[test]
    fn test_untagged_group_matches_only_empty_filter() {
        let g3 = tags(&[]);
        assert!(tags_match(&g3, &TagFilter::new()));
        assert!(!tags_match(&g3, &filter(&[("a", "b")])));
    }

    #[test]
    fn test_empty_filter_returns_every_group_in_order() {
        let groups = vec![
            group("zeta", &[("env", "prod")]),
            group("alpha", &[]),
            group("mid", &[("team", "core")]),
        ];
        let names: Vec<_> = match_groups(&groups, &TagFilter::new())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_only_matching_groups_are_reported() {
        let groups = vec![
            group("web-prod", &[("env", "prod"), ("role", "web")]),
            group("web-dev", &[("env", "dev"), ("role", "web")]),
            group("db-prod", &[("env", "prod"), ("role", "db")]),
        ];
        let reports = match_groups(&groups, &filter(&[("env", "prod")]));
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["web-prod", "db-prod"]);
    }

    #[test]
    fn test_no_groups_gives_no_reports() {
        assert!(match_groups(&[], &filter(&[("env", "prod")])).is_empty());
    }
}

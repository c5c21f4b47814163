use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{FindError, Result};

/// Exact-match key/value predicate used to select groups.
///
/// An empty filter is valid and selects every group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagFilter(BTreeMap<String, String>);

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Adds one pair. Repeating a key is fine as long as the value agrees.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        match self.0.get(&key) {
            Some(existing) if *existing != value => Err(FindError::ConflictingTag {
                key,
                first: existing.clone(),
                second: value,
            }),
            Some(_) => Ok(()),
            None => {
                self.0.insert(key, value);
                Ok(())
            }
        }
    }

    /// Builds a filter from `KEY=VALUE` arguments and an optional JSON object.
    ///
    /// At least one of the two sources must be present; `--tags-json '{}'`
    /// is how callers ask for every group.
    pub fn from_sources(pairs: &[String], json: Option<&str>) -> Result<Self> {
        if pairs.is_empty() && json.is_none() {
            return Err(FindError::MissingTags);
        }

        let mut filter = TagFilter::new();
        if let Some(json) = json {
            for (key, value) in parse_tags_json(json)? {
                filter.insert(key, value)?;
            }
        }
        for pair in pairs {
            let (key, value) = parse_tag_pair(pair)?;
            filter.insert(key, value)?;
        }

        debug!(tag_count = filter.len(), "Tag filter assembled");
        Ok(filter)
    }
}

impl FromIterator<(String, String)> for TagFilter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        TagFilter(iter.into_iter().collect())
    }
}

/// Splits `KEY=VALUE` at the first `=`. The value may be empty or contain `=`.
pub fn parse_tag_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(FindError::InvalidTag(pair.to_string())),
    }
}

fn parse_tags_json(json: &str) -> Result<Vec<(String, String)>> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| FindError::InvalidTagsJson(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| FindError::InvalidTagsJson(format!("expected an object, got {}", value)))?;

    object
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(s) => Ok((key.clone(), s.to_string())),
            None => Err(FindError::InvalidTagsJson(format!(
                "value of '{}' is {}, expected a string",
                key, value
            ))),
        })
        .collect()
}

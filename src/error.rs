//! Error types for asg-find.

use thiserror::Error;

/// Errors that end a query. None of them leave partial results behind.
#[derive(Error, Debug)]
pub enum FindError {
    #[error("tags is required: pass --tag KEY=VALUE or --tags-json")]
    MissingTags,

    #[error("invalid tag filter '{0}': expected KEY=VALUE")]
    InvalidTag(String),

    #[error("tag '{key}' given twice with different values ('{first}' and '{second}')")]
    ConflictingTag {
        key: String,
        first: String,
        second: String,
    },

    #[error("tags must be a JSON object of string values: {0}")]
    InvalidTagsJson(String),

    #[error("failed to connect to AWS for the given region: {region}: {reason}")]
    Connection { region: String, reason: String },

    #[error("failed to list Auto Scaling groups in {region}: {reason}")]
    Fetch { region: String, reason: String },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FindError {
    pub fn connection(region: Option<&str>, reason: impl std::fmt::Display) -> Self {
        FindError::Connection {
            region: region.unwrap_or("None").to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a fetch error from an SDK error, keeping the full source chain.
    pub fn fetch(region: &str, err: &dyn std::error::Error) -> Self {
        FindError::Fetch {
            region: region.to_string(),
            reason: error_chain(err),
        }
    }
}

/// Renders an error and all of its sources as `outer: inner: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}

pub type Result<T> = std::result::Result<T, FindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn test_connection_error_without_region() {
        let err = FindError::connection(None, "no region resolved");
        assert_eq!(
            err.to_string(),
            "failed to connect to AWS for the given region: None: no region resolved"
        );
    }

    #[test]
    fn test_fetch_error_flattens_source_chain() {
        let err = FindError::fetch("eu-west-1", &Outer(Inner));
        assert_eq!(
            err.to_string(),
            "failed to list Auto Scaling groups in eu-west-1: outer: inner"
        );
    }
}

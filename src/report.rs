use serde_json::json;
use std::io::Write;

use crate::error::{FindError, Result};
use crate::model::MatchResult;

/// Renders the outcome of a query as the JSON document written to stdout.
pub fn render(outcome: &Result<MatchResult>, pretty: bool) -> String {
    let document = match outcome {
        Ok(result) => serde_json::to_value(result).map_err(FindError::from),
        Err(e) => Ok(failure(e)),
    };
    let document = document.unwrap_or_else(|e| failure(&e));

    let rendered = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    rendered.unwrap_or_else(|e| failure(&FindError::from(e)).to_string())
}

fn failure(err: &FindError) -> serde_json::Value {
    json!({ "failed": true, "msg": err.to_string() })
}

/// Writes the outcome and returns the process exit code: 0 on success, 1 on
/// failure.
pub fn report<W: Write>(
    out: &mut W,
    outcome: &Result<MatchResult>,
    pretty: bool,
) -> std::io::Result<u8> {
    writeln!(out, "{}", render(outcome, pretty))?;
    out.flush()?;
    Ok(if outcome.is_ok() { 0 } else { 1 })
}

//! Result rendering for stdout.

use serde::Serialize;

/// JSON shape of a command result.
#[derive(Debug, Serialize)]
struct ResultOutput<'a> {
    result: &'a str,
}

/// Render tool output either verbatim or as `{"result": ...}`.
///
/// JSON output is pretty-printed with two-space indentation.
pub fn format_result(text: &str, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(&ResultOutput { result: text })
    } else {
        Ok(text.to_string())
    }
}

//! Response decoding.
//!
//! The endpoint answers either with a bare JSON document or with a one-shot
//! event stream whose first `data: ` line carries the same document. The
//! branch is chosen from the declared content type alone.

use crate::error::{Error, Result};
use crate::protocol::JsonRpcResponse;

const EVENT_STREAM: &str = "text/event-stream";
const DATA_PREFIX: &str = "data: ";

/// How a response body is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// The body is the JSON-RPC envelope.
    Json,
    /// The envelope is carried on a `data: ` line.
    EventStream,
}

impl PayloadKind {
    /// Classify a `Content-Type` header value.
    ///
    /// Parameters such as `charset` are ignored and matching is
    /// case-insensitive. Anything other than an event stream, including an
    /// empty value, is treated as JSON.
    pub fn from_content_type(content_type: &str) -> Self {
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if media_type == EVENT_STREAM {
            Self::EventStream
        } else {
            Self::Json
        }
    }
}

/// Decode a response body into a JSON-RPC envelope.
pub fn decode_body(kind: PayloadKind, body: &str) -> Result<JsonRpcResponse> {
    match kind {
        PayloadKind::Json => serde_json::from_str(body)
            .map_err(|e| Error::protocol(format!("malformed JSON in response: {}", e))),
        PayloadKind::EventStream => {
            let data = body
                .split(['\r', '\n'])
                .find_map(|line| line.strip_prefix(DATA_PREFIX))
                .ok_or_else(|| Error::protocol("No data in SSE response"))?;

            serde_json::from_str(data).map_err(|e| {
                Error::protocol(format!("malformed JSON in event-stream payload: {}", e))
            })
        }
    }
}

/// Reduce a decoded envelope to the tool's text payload.
///
/// A response with neither `result` nor `error` is reported the same way as
/// a tool that set `isError`.
pub fn extract_text(response: JsonRpcResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(Error::application(format!("MCP error: {}", error.message)));
    }

    match response.result {
        Some(result) if !result.is_error() && !result.content.is_empty() => {
            let mut content = result.content;
            Ok(content.swap_remove(0).text)
        }
        other => {
            let message = other
                .as_ref()
                .and_then(|r| r.first_text())
                .filter(|text| !text.is_empty())
                .unwrap_or("Unknown error");
            Err(Error::application(message))
        }
    }
}

//! DeepWiki client: HTTP transport plus the per-tool façade.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use url::Url;

use crate::decode::{PayloadKind, decode_body, extract_text};
use crate::error::{Error, Result};
use crate::protocol::{
    CallToolParams, JsonRpcRequest, JsonRpcResponse, RequestIds, TOOLS_CALL_METHOD,
};

/// Well-known DeepWiki MCP endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://mcp.deepwiki.com/mcp";

/// Deadline for a single call, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Media types the endpoint may answer with.
const ACCEPT_VALUE: &str = "application/json, text/event-stream";

/// Remote tools exposed by the DeepWiki service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Table of contents of a repository wiki.
    ReadWikiStructure,
    /// Full wiki content of a repository.
    ReadWikiContents,
    /// Question answered from one or more repository wikis.
    AskQuestion,
}

impl Tool {
    /// Wire name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::ReadWikiStructure => "read_wiki_structure",
            Tool::ReadWikiContents => "read_wiki_contents",
            Tool::AskQuestion => "ask_question",
        }
    }
}

/// Client for the DeepWiki MCP endpoint.
///
/// Each call is one HTTP POST. Request IDs come from a counter owned by the
/// client, so they increase across all tools called through it.
///
/// # Example
///
/// ```no_run
/// use deepwiki_client::DeepWikiClient;
///
/// # async fn example() -> deepwiki_client::Result<()> {
/// let client = DeepWikiClient::builder().build()?;
/// let answer = client
///     .ask_question(&["tokio-rs/tokio".to_string()], "How does the scheduler work?")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeepWikiClient {
    /// HTTP client.
    http: reqwest::Client,
    /// Endpoint receiving every tools/call request.
    endpoint: Url,
    /// Per-call deadline.
    timeout: Duration,
    /// Source of request IDs.
    ids: RequestIds,
}

impl DeepWikiClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tools
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the wiki table of contents for `owner/name`.
    pub async fn read_wiki_structure(&self, repo: &str) -> Result<String> {
        self.call_tool(Tool::ReadWikiStructure, json!({ "repoName": repo }))
            .await
    }

    /// Fetch the full wiki content for `owner/name`.
    pub async fn read_wiki_contents(&self, repo: &str) -> Result<String> {
        self.call_tool(Tool::ReadWikiContents, json!({ "repoName": repo }))
            .await
    }

    /// Ask a question about one or more repositories.
    ///
    /// A single repository is sent as a string, several as an array; the
    /// service relies on that distinction.
    pub async fn ask_question(&self, repos: &[String], question: &str) -> Result<String> {
        let repo_name = match repos {
            [single] => Value::String(single.clone()),
            many => Value::from(many.to_vec()),
        };

        self.call_tool(
            Tool::AskQuestion,
            json!({ "repoName": repo_name, "question": question }),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────────────────

    /// Invoke a tool and return the text of its first content item.
    pub async fn call_tool(&self, tool: Tool, arguments: Value) -> Result<String> {
        let params = CallToolParams {
            name: tool.as_str().to_string(),
            arguments,
        };
        let request = self
            .ids
            .build(TOOLS_CALL_METHOD, serde_json::to_value(params)?);

        tracing::debug!(
            tool = tool.as_str(),
            id = request.id,
            endpoint = %self.endpoint,
            "calling DeepWiki tool"
        );

        // Dropping the in-flight future on expiry releases the connection.
        let response = tokio::time::timeout(self.timeout, self.exchange(&request))
            .await
            .map_err(|_| Error::Timeout(self.timeout))??;

        extract_text(response)
    }

    /// Send one request and decode the body.
    async fn exchange(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let kind = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(PayloadKind::from_content_type)
            .unwrap_or(PayloadKind::Json);

        let body = response.text().await.map_err(|e| self.classify(e))?;

        tracing::debug!(
            status = status.as_u16(),
            payload = ?kind,
            bytes = body.len(),
            "received DeepWiki response"
        );
        tracing::trace!(body = %body, "DeepWiki response body");

        decode_body(kind, &body)
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Connection(err)
        }
    }
}

/// Builder for creating a [`DeepWikiClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the per-call deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DeepWikiClient> {
        let endpoint = Url::parse(&self.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported endpoint scheme '{}'",
                endpoint.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be non-zero".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("deepwiki-cli/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(DeepWikiClient {
            http,
            endpoint,
            timeout: self.timeout,
            ids: RequestIds::new(),
        })
    }
}

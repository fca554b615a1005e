//! JSON-RPC client for the DeepWiki documentation service.
//!
//! This crate calls the three wiki tools exposed by the remote MCP endpoint
//! and reduces every response to either the tool's text payload or a
//! classified [`Error`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  DeepWikiClient                                             │
//! │  - read_wiki_structure, read_wiki_contents, ask_question    │
//! │  - Single HTTP POST per call, bounded by a deadline         │
//! └─────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  decode                                                     │
//! │  - Plain JSON body or one-shot event-stream `data:` frame   │
//! │  - RPC error / tool error / missing content classification  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use deepwiki_client::DeepWikiClient;
//!
//! # async fn example() -> deepwiki_client::Result<()> {
//! let client = DeepWikiClient::builder().build()?;
//! let toc = client.read_wiki_structure("facebook/react").await?;
//! println!("{}", toc);
//! # Ok(())
//! # }
//! ```
//!
//! # Wire format
//!
//! Every call is a `tools/call` request:
//!
//! ```text
//! {"jsonrpc":"2.0","method":"tools/call","params":{"name":"...","arguments":{...}},"id":1}
//! ```
//!
//! The server answers either with `application/json` or with a
//! `text/event-stream` body carrying the same envelope on a `data: ` line.

pub mod client;
pub mod decode;
pub mod error;
pub mod protocol;

pub use client::{ClientBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DeepWikiClient, Tool};
pub use decode::{PayloadKind, decode_body, extract_text};
pub use error::{Error, Result};
pub use protocol::{
    CallToolParams, CallToolResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestIds,
    ToolContent,
};

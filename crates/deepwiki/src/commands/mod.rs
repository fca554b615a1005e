//! CLI command handlers.

pub mod ask;
pub mod toc;
pub mod wiki;

use console::Style;
use deepwiki_client::DeepWikiClient;

/// Shared context for all commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Suppress the progress spinner.
    pub quiet: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Note describing the outgoing call, only in verbose mode.
    pub fn request_note(&self, client: &DeepWikiClient) -> Option<String> {
        self.verbose
            .then(|| format!("Sending to: {}", client.endpoint()))
    }

    /// Print the request note on stderr, keeping stdout for results.
    pub fn announce(&self, client: &DeepWikiClient) {
        if let Some(note) = self.request_note(client) {
            let dim = Style::new().dim().for_stderr();
            eprintln!("{}", dim.apply_to(note));
        }
    }
}

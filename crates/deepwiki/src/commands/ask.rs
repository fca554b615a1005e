//! Ask command - question answered across one or more repos.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use deepwiki_client::DeepWikiClient;

use super::Context;
use crate::error::CliError;
use crate::output::format_result;
use crate::spinner::with_spinner;

/// Arguments for the ask command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// One or more repos (owner/repo) followed by the question
    #[arg(required = true, value_name = "REPOS... QUESTION")]
    pub args: Vec<String>,
}

fn label(repos: &[String]) -> String {
    match repos {
        [single] => format!("Asking about {}...", single),
        many => format!("Asking about {} repos...", many.len()),
    }
}

/// Run the ask command with already validated repos.
pub async fn run<W: Write>(
    repos: &[String],
    question: &str,
    ctx: &Context,
    client: &DeepWikiClient,
    out: &mut W,
) -> Result<()> {
    ctx.announce(client);
    let text = with_spinner(
        &label(repos),
        ctx.quiet,
        client.ask_question(repos, question),
    )
    .await
    .map_err(CliError::from)?;

    writeln!(out, "{}", format_result(&text, ctx.json_output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client_for, options, sent_params, serve_text};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_label() {
        assert_eq!(
            label(&strings(&["facebook/react"])),
            "Asking about facebook/react..."
        );
        assert_eq!(
            label(&strings(&["facebook/react", "vercel/next.js"])),
            "Asking about 2 repos..."
        );
    }

    #[tokio::test]
    async fn test_ask_single_repo() {
        let server = serve_text("React uses fibers for reconciliation.").await;
        let client = client_for(&server);
        let mut out = Vec::new();

        run(
            &strings(&["facebook/react"]),
            "How does reconciliation work?",
            &options(false),
            &client,
            &mut out,
        )
        .await
        .unwrap();

        assert!(String::from_utf8(out).unwrap().contains("fibers"));
        let params = sent_params(&server).await;
        assert_eq!(params[0]["name"], "ask_question");
        assert_eq!(params[0]["arguments"]["repoName"], "facebook/react");
        assert_eq!(
            params[0]["arguments"]["question"],
            "How does reconciliation work?"
        );
    }

    #[tokio::test]
    async fn test_ask_multiple_repos() {
        let server = serve_text("answer").await;
        let client = client_for(&server);
        let mut out = Vec::new();

        run(
            &strings(&["facebook/react", "vercel/next.js"]),
            "SSR question",
            &options(false),
            &client,
            &mut out,
        )
        .await
        .unwrap();

        let params = sent_params(&server).await;
        assert_eq!(
            params[0]["arguments"]["repoName"],
            serde_json::json!(["facebook/react", "vercel/next.js"])
        );
    }
}

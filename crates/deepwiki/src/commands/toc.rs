//! Toc command - wiki table of contents for a repo.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use deepwiki_client::DeepWikiClient;

use super::Context;
use crate::error::CliError;
use crate::output::format_result;
use crate::spinner::with_spinner;

/// Arguments for the toc command.
#[derive(Args, Debug)]
pub struct TocArgs {
    /// GitHub repo (owner/repo)
    pub repo: String,
}

/// Run the toc command.
pub async fn run<W: Write>(
    args: TocArgs,
    ctx: &Context,
    client: &DeepWikiClient,
    out: &mut W,
) -> Result<()> {
    let label = format!("Fetching table of contents for {}...", args.repo);
    ctx.announce(client);
    let text = with_spinner(&label, ctx.quiet, client.read_wiki_structure(&args.repo))
        .await
        .map_err(CliError::from)?;

    writeln!(out, "{}", format_result(&text, ctx.json_output)?)?;
    Ok(())
}

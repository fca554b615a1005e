//! Wiki command - full wiki content for a repo.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use deepwiki_client::DeepWikiClient;

use super::Context;
use crate::error::CliError;
use crate::output::format_result;
use crate::spinner::with_spinner;

/// Arguments for the wiki command.
#[derive(Args, Debug)]
pub struct WikiArgs {
    /// GitHub repo (owner/repo)
    pub repo: String,
}

/// Run the wiki command.
pub async fn run<W: Write>(
    args: WikiArgs,
    ctx: &Context,
    client: &DeepWikiClient,
    out: &mut W,
) -> Result<()> {
    let label = format!("Fetching wiki for {}...", args.repo);
    ctx.announce(client);
    let text = with_spinner(&label, ctx.quiet, client.read_wiki_contents(&args.repo))
        .await
        .map_err(CliError::from)?;

    writeln!(out, "{}", format_result(&text, ctx.json_output)?)?;
    Ok(())
}

//! deepwiki - query any public GitHub repo's docs via DeepWiki
//!
//! Main entry point for the deepwiki CLI.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Style;
use deepwiki_client::DeepWikiClient;

mod commands;
mod error;
mod output;
mod spinner;
mod validate;

use commands::{ask, toc, wiki};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Query any public GitHub repo's docs via DeepWiki
#[derive(Parser, Debug)]
#[command(name = "deepwiki")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output raw JSON from server
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colors
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the DeepWiki MCP endpoint
    #[arg(long, global = true, hide = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the table of contents for a repo's wiki
    Toc(toc::TocArgs),

    /// Get the full wiki content for a repo
    Wiki(wiki::WikiArgs),

    /// Ask a question about one or more repos
    Ask(ask::AskArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let red = Style::new().red().for_stderr();
            eprintln!("{}", red.apply_to(format!("Error: {}", err)));
            ExitCode::from(error::exit_code_for(&err))
        }
    }
}

/// Console logging on stderr; stdout carries only command results.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "deepwiki=debug,deepwiki_client=debug,info"
    } else {
        "deepwiki=warn,deepwiki_client=warn,warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(console::colors_enabled_stderr())
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

/// Validate arguments, then dispatch to the command handler.
async fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context {
        json_output: cli.json,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    // Usage errors surface before the client is even built.
    let command = Validated::from_command(cli.command)?;

    let mut builder = DeepWikiClient::builder();
    if let Some(endpoint) = cli.endpoint {
        builder = builder.endpoint(endpoint);
    }
    let client = builder.build().map_err(error::CliError::from)?;

    tracing::debug!(
        command = ?command,
        endpoint = %client.endpoint(),
        json = ctx.json_output,
        "dispatching command"
    );

    let mut stdout = std::io::stdout();
    match command {
        Validated::Toc(args) => toc::run(args, &ctx, &client, &mut stdout).await,
        Validated::Wiki(args) => wiki::run(args, &ctx, &client, &mut stdout).await,
        Validated::Ask { repos, question } => {
            ask::run(&repos, &question, &ctx, &client, &mut stdout).await
        }
    }
}

/// A command whose arguments passed validation.
#[derive(Debug)]
enum Validated {
    Toc(toc::TocArgs),
    Wiki(wiki::WikiArgs),
    Ask { repos: Vec<String>, question: String },
}

impl Validated {
    fn from_command(command: Commands) -> Result<Self, error::CliError> {
        match command {
            Commands::Toc(args) => {
                validate::validate_repo(&args.repo)?;
                Ok(Self::Toc(args))
            }
            Commands::Wiki(args) => {
                validate::validate_repo(&args.repo)?;
                Ok(Self::Wiki(args))
            }
            Commands::Ask(args) => {
                let (repos, question) = validate::split_ask_args(args.args)?;
                Ok(Self::Ask { repos, question })
            }
        }
    }
}

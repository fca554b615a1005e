//! Argument validation that runs before any network call.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CliError;

/// Upper bound on repositories for a single question.
pub const MAX_ASK_REPOS: usize = 10;

static REPO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$").expect("repo pattern is a valid regex")
});

/// Check that `repo` looks like `owner/name`.
pub fn validate_repo(repo: &str) -> Result<(), CliError> {
    if REPO_RE.is_match(repo) {
        Ok(())
    } else {
        Err(CliError::usage(format!(
            "Invalid repo \"{}\": expected format owner/repo",
            repo
        )))
    }
}

/// Split `ask` positionals into repositories and the trailing question.
pub fn split_ask_args(mut args: Vec<String>) -> Result<(Vec<String>, String), CliError> {
    if args.len() < 2 {
        return Err(CliError::usage(
            "Usage: deepwiki ask <owner/repo> [more repos...] \"<question>\"",
        ));
    }

    let question = args.pop().unwrap_or_default();
    let repos = args;

    if repos.len() > MAX_ASK_REPOS {
        return Err(CliError::usage(format!(
            "Maximum {} repos allowed",
            MAX_ASK_REPOS
        )));
    }

    for repo in &repos {
        validate_repo(repo)?;
    }

    Ok((repos, question))
}

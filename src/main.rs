//! Command-line entry point: fetches the newest GitHub Actions artifact of a
//! repository and extracts it into the current working directory.

use std::process::ExitCode;

use clap::{CommandFactory as _, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use latest_artifact::{
    build_info::BuildInfo, transactions::fetch_latest_artifact,
    workflow::artifact::GITHUB_API_BASE,
};

/// Fetches the newest GitHub Actions artifact of a repository and extracts it
/// into the current working directory.
///
/// Authenticates with the `GITHUB_TOKEN` environment variable when set.
#[derive(Debug, Parser)]
#[command(name = "latest-artifact", version)]
struct Cli {
    /// Repository owner
    #[arg(long)]
    owner: Option<String>,
    /// Repository name
    #[arg(long)]
    repo: Option<String>,
}

/// Validates the required parameters without touching the network.
fn resolve_params(cli: &Cli) -> Option<(String, String)> {
    match (cli.owner.as_deref(), cli.repo.as_deref()) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            Some((owner.to_owned(), repo.to_owned()))
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some((owner, repo)) = resolve_params(&cli) else {
        eprintln!("parameters --owner and --repo are required\n");
        eprintln!("{}", Cli::command().render_help());
        eprint!("{}", BuildInfo::current());
        return ExitCode::from(1);
    };

    let path = match std::env::current_dir() {
        Ok(path) => path,
        Err(err) => {
            error!("failed to resolve the current working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match fetch_latest_artifact(GITHUB_API_BASE, &owner, &repo, &path).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn both_parameters_are_required() {
        let missing: [&[&str]; 4] = [
            &["latest-artifact"],
            &["latest-artifact", "--owner", "o"],
            &["latest-artifact", "--repo", "r"],
            &["latest-artifact", "--owner", "", "--repo", "r"],
        ];
        for args in missing {
            let cli = Cli::parse_from(args);
            assert_eq!(resolve_params(&cli), None, "{args:?}");
        }

        let cli = Cli::parse_from(["latest-artifact", "--owner", "o", "--repo", "r"]);
        assert_eq!(
            resolve_params(&cli),
            Some((String::from("o"), String::from("r")))
        );
    }
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line flags using clap and set up logging
// 2. Ask for whatever the flags didn't answer (URL, token, language)
// 3. Run the pipeline: list files -> download each -> copy to clipboard
// 4. Print what happened
//
// Every failure is printed as a message; the process always exits normally.
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs inside a tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Trait objects (Box<dyn ...>): To choose clipboard vs stdout at runtime
// =============================================================================

// Module declarations - tells Rust about our other source files
mod aggregate;     // src/aggregate/ - list -> fetch -> emit pipeline
mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - FetchError
mod github;        // src/github/ - GitHub URL parsing and API calls
mod language;      // src/language.rs - language menu
mod logging;       // src/logging.rs - tracing setup
mod output;        // src/output.rs - clipboard / stdout sinks
mod prompt;        // src/prompt.rs - interactive questions
mod token;         // src/token.rs - token file

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use aggregate::{Aggregator, RunOutcome};
use cli::Cli;
use github::{parse_repo_url, ClientConfig, GitHubClient, RepositoryRef};
use language::Language;
use output::{ClipboardSink, OutputSink, StdoutSink};
use prompt::Prompter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        // {:#} prints the whole context chain on one line
        eprintln!("Error: {:#}", e);
    }
}

// Everything the pipeline needs, whether it came from flags or prompts
#[derive(Debug)]
struct RunInputs {
    repo: RepositoryRef,
    token: Option<String>,
    language: Language,
}

async fn run(cli: Cli) -> Result<()> {
    // With --stdout the aggregate owns stdout, so all chatter moves to stderr
    let chatter: Box<dyn Write> = if cli.stdout {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let inputs = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), chatter);
        gather_inputs(&cli, &mut prompter)?
    };

    let client = GitHubClient::new(ClientConfig {
        api_url: cli.api_url.clone(),
        token: inputs.token,
        branch: cli.branch.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
    })?;

    let sink: Box<dyn OutputSink> = if cli.stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(ClipboardSink)
    };

    let extension = inputs.language.extension();
    let mut aggregator = Aggregator::new(client, sink).with_progress(true);
    let outcome = aggregator.run(&inputs.repo, extension).await?;

    match outcome {
        RunOutcome::Emitted { files } if cli.stdout => {
            eprintln!("\n{} {}-file(s) written to stdout", files, extension);
        }
        RunOutcome::Emitted { files } => {
            println!(
                "\nContent of all {}-files from this repo has been copied to your clipboard ({} files)",
                extension, files
            );
            if let Some(hint) = ClipboardSink::persistence_hint() {
                println!("{}", hint);
            }
        }
        RunOutcome::NoFiles => {
            eprintln!("\nNo {}-Files found", extension);
        }
        RunOutcome::ListingFailed(e) => {
            eprintln!("Error retrieving the repository {}: {}", inputs.repo, e);
        }
    }

    Ok(())
}

// Fills in RunInputs, asking only for what the flags left out.
//
// Order matches the interactive flow: URL, then token, then language.
// The token comes from --token / GITHUB_TOKEN, else the token file,
// else the prompt (where Enter means "no token").
fn gather_inputs<R: BufRead, W: Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<RunInputs> {
    let url = match &cli.url {
        Some(url) => url.clone(),
        None => prompter.repository_url()?,
    };
    let repo = parse_repo_url(&url)?;

    let token = match &cli.token {
        Some(token) => Some(token.clone()),
        None => match token::read_token_file(&cli.token_file)? {
            Some(token) => {
                prompter.notice(&format!(
                    "API-Key has automatically been read from '{}'",
                    cli.token_file.display()
                ))?;
                Some(token)
            }
            None => prompter.token()?,
        },
    };

    let choice = match &cli.language {
        Some(choice) => choice.clone(),
        None => prompter.language_choice()?,
    };
    let language = Language::from_choice(&choice)?;

    Ok(RunInputs {
        repo,
        token,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    // Points --token-file somewhere that doesn't exist so a real
    // gitaccesstoken.txt in the working directory can't leak into tests
    fn cli(args: &[&str], dir: &tempfile::TempDir) -> Cli {
        let token_file = dir.path().join("gitaccesstoken.txt");
        let mut argv = vec!["repo-clip".to_string(), "--token-file".to_string()];
        argv.push(token_file.display().to_string());
        argv.extend(args.iter().map(|a| a.to_string()));
        let mut cli = Cli::try_parse_from(argv).unwrap();
        // GITHUB_TOKEN from the environment would skip the prompt
        if !args.contains(&"--token") {
            cli.token = None;
        }
        cli
    }

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_everything_from_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("https://github.com/psf/requests\nghp_abc\n1\n");

        let inputs = gather_inputs(&cli(&[], &dir), &mut p).unwrap();

        assert_eq!(inputs.repo, RepositoryRef::new("psf", "requests"));
        assert_eq!(inputs.token.as_deref(), Some("ghp_abc"));
        assert_eq!(inputs.language, Language::Python);
    }

    #[test]
    fn test_flags_skip_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let args = ["--url", "https://github.com/a/b", "--token", "t", "--language", "3"];
        // Empty input: any prompt would read "" and fail the URL/language parse
        let mut p = prompter("");

        let inputs = gather_inputs(&cli(&args, &dir), &mut p).unwrap();

        assert_eq!(inputs.repo, RepositoryRef::new("a", "b"));
        assert_eq!(inputs.token.as_deref(), Some("t"));
        assert_eq!(inputs.language, Language::CSharp);
        assert!(p.into_output().is_empty());
    }

    #[test]
    fn test_token_file_skips_token_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gitaccesstoken.txt"), "ghp_from_file\n").unwrap();
        let mut p = prompter("https://github.com/a/b\n2\n");

        let inputs = gather_inputs(&cli(&[], &dir), &mut p).unwrap();

        assert_eq!(inputs.token.as_deref(), Some("ghp_from_file"));
        assert_eq!(inputs.language, Language::Java);
        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("API-Key has automatically been read from"));
        assert!(!shown.contains("Personal Access Token"));
    }

    #[test]
    fn test_invalid_url_stops_before_other_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("https://gitlab.com/a/b\n\n1\n");

        let err = gather_inputs(&cli(&[], &dir), &mut p).unwrap_err();

        assert!(matches!(err.downcast_ref::<FetchError>(), Some(FetchError::InvalidInput(_))));
        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(!shown.contains("Choose language"));
    }

    #[test]
    fn test_unknown_language_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("https://github.com/a/b\n\n7\n");

        let err = gather_inputs(&cli(&[], &dir), &mut p).unwrap_err();

        assert!(matches!(err.downcast_ref::<FetchError>(), Some(FetchError::InvalidInput(_))));
    }
}

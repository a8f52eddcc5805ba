//! review-digest: summarize review comments read from stdin.
//!
//! Writes exactly one JSON line to stdout. Logs go to stderr.

use std::io::Read;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use digest_core::{DigestConfig, SummaryResult};
use digest_runtime::{parse_request, Summarizer};

mod cli;
mod output;

use cli::{Command, Overrides};

fn run(overrides: &Overrides) -> anyhow::Result<SummaryResult> {
    let mut config = DigestConfig::from_env()?;
    overrides.apply(&mut config);

    let mut raw = Vec::new();
    std::io::stdin().read_to_end(&mut raw)?;
    let input = String::from_utf8_lossy(&raw);

    let comments = parse_request(&input);
    let summarizer = Summarizer::new(config);
    debug!(
        "Summarizing {} comments with {} segmenter, target {} sentences",
        comments.len(),
        summarizer.config().segmenter,
        summarizer.config().target_sentences
    );

    Ok(summarizer.respond(&comments))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let overrides = match cli::parse_args(&args) {
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(Command::Summarize(overrides)) => overrides,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run(&overrides) {
        Ok(result) => output::write_line(&mut stdout, &result),
        Err(e) => {
            error!("Summarization failed: {:#}", e);
            output::write_line(&mut stdout, &SummaryResult::failure(format!("{:#}", e)))?;
            std::process::exit(1);
        }
    }
}

mod cli;
mod error;

use std::io::{Write, stdout};
use std::process::ExitCode;

use clap::Parser;
use exn::ResultExt;
use foodsafe_config::Config;
use foodsafe_extract::Extractor;
use foodsafe_extract::models::Results;
use foodsafe_source::{Fetcher, Page, SearchQuery, load};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputArgs};
use crate::error::{ErrorKind, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with_writer(std::io::stderr)
        .init();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let (page, output) = match cli.command {
        Command::Fetch { params, save, output } => {
            let mut query = SearchQuery::new();
            query.extend(config.query.iter().map(|(key, value)| (key, value.as_str())));
            query.extend(params);
            let page = fetch(&config, &query).await?;
            if let Some(path) = save {
                page.save(&path).await.or_raise(|| ErrorKind::Output)?;
                tracing::info!(path = %path.display(), "saved results page");
            }
            (page, output)
        },
        Command::Load { path, encoding, output } => {
            let encoding = encoding.unwrap_or_else(|| config.encoding.clone());
            (load(&path, &encoding).await.or_raise(|| ErrorKind::Source)?, output)
        },
    };
    let document = page.parse().or_raise(|| ErrorKind::Extract)?;
    let results = Extractor::from_document(document)
        .with_pattern(&config.listing_pattern())
        .or_raise(|| ErrorKind::Config)?
        .results();
    if results.is_empty() {
        tracing::warn!("no restaurant listings found");
    } else {
        tracing::info!(restaurants = results.len(), "extracted inspection results");
    }
    print(&results, output)
}

async fn fetch(config: &Config, query: &SearchQuery) -> Result<Page> {
    let fetcher = Fetcher::new(config).or_raise(|| ErrorKind::Source)?;
    tracing::info!(endpoint = fetcher.endpoint(), "searching inspection results");
    fetcher.fetch(query).await.or_raise(|| ErrorKind::Source)
}

fn print(results: &Results, output: OutputArgs) -> Result<()> {
    let mut stdout = stdout().lock();
    if output.compact {
        serde_json::to_writer(&mut stdout, results).or_raise(|| ErrorKind::Output)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, results).or_raise(|| ErrorKind::Output)?;
    }
    writeln!(stdout).or_raise(|| ErrorKind::Output)
}

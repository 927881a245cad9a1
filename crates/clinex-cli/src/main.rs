//! Clinex CLI - Extract categorized clinical entities from free text.

use anyhow::Context;
use clap::Parser;
use clinex_cli::{Cli, Config, Formatter};
use clinex_client::NlpClient;
use clinex_domain::CategorizedEntities;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let text = read_input(&cli)?;
    let entities = extract(&cli, config, &text).await;

    let formatter = Formatter::new(cli.format);
    println!("{}", formatter.format_entities(&entities)?);

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

async fn extract(cli: &Cli, config: Config, text: &str) -> CategorizedEntities {
    if cli.demo {
        if text.is_empty() {
            return CategorizedEntities::new();
        }
        return clinex_client::fallback_classify(text);
    }

    NlpClient::new(config.client).extract_entities(text).await
}

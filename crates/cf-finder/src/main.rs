//! CarFinder: search a vehicle catalog by form fields or plain language.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cf_finder::command::Cli;
use cf_finder::config::FinderConfig;
use cf_finder::controller::SearchController;
use cf_finder::inventory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    // ── Load config ─────────────────────────────────────────────
    let config = match cli.config.as_deref() {
        Some(path) => {
            let config = FinderConfig::from_file(path)?;
            tracing::info!(path, "config loaded");
            config
        }
        None => FinderConfig::default(),
    };

    // ── Catalog + interpreter ───────────────────────────────────
    let catalog = inventory::load_catalog(config.catalog_path.as_deref())?;
    let interpreter = config.interpreter.build();
    let controller = SearchController::new(Arc::<[_]>::from(catalog), interpreter);

    let output = cli.command_or_default().run(&controller).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

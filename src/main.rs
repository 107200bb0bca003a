use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hangman::{args::Args, config::Config, db, logging, ui, wordlist::WordCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    let _log_guard = logging::init(&config.log_dir)?;

    info!(db = %config.db_path.display(), "starting hangman");

    let pool = db::create_pool_at(&config.db_path).await?;

    let seeded = db::words::ensure_seeded(&pool, || {
        WordCatalog::load_or_embedded(config.words_path.as_deref())
    })
    .await
    .context("Failed to initialise word store")?;

    if seeded > 0 {
        info!(seeded, "first start: word store populated");
    }

    let result = ui::run_ui(pool.clone());

    pool.close().await;
    info!("hangman exited");

    result
}

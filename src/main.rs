use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use todo_lists::{
    presentation,
    storage::{JsonFixture, SeedSource, StaticSeed},
    ListStore, ServerConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo-lists-server", about = "Serve the todo-lists bundle", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the compiled bundle
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML document served for client-side routes
    #[arg(long)]
    index_file: Option<PathBuf>,

    /// JSON fixture with the initial lists
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    config.apply_env(|key| std::env::var(key).ok())?;

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(index_file) = cli.index_file {
        config.index_file = index_file;
    }
    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }

    let seed = match &config.seed_file {
        Some(path) => JsonFixture::new(path)
            .load()
            .await
            .with_context(|| format!("failed to load seed {}", path.display()))?,
        None => StaticSeed.load().await?,
    };

    // Validates titles before anything is served
    let store = ListStore::from_seed(seed).context("invalid seed data")?;
    tracing::debug!("overview:\n{}", presentation::render_text(store.lists()));

    todo_lists::server::serve(&config, store.lists().to_vec()).await?;
    Ok(())
}

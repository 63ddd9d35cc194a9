mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use itemlist_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("ITEMLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout and stderr carry the JSON responses, so stay quiet unless asked
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "itemlist", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("--file is required (or set ITEMLIST_FILE)"))?;
    let mut ctx = CliContext::load(&file_path, AppConfig::load()).await?;

    match cli.command {
        Commands::Add {
            title,
            content,
            force,
        } => handlers::item::handle_add(&mut ctx, title, content, force).await?,
        Commands::List => handlers::item::handle_list(&mut ctx).await?,
        Commands::Get { id } => handlers::item::handle_get(&mut ctx, id).await?,
        Commands::Toggle { id } => handlers::item::handle_toggle(&mut ctx, id).await?,
        Commands::SelectAll { deselect } => {
            handlers::item::handle_select_all(&mut ctx, deselect).await?
        }
        Commands::DeleteSelected => handlers::item::handle_delete_selected(&mut ctx).await?,
        Commands::Clear => handlers::item::handle_clear(&mut ctx).await?,
        Commands::Update { id, title, content } => {
            handlers::item::handle_update(&mut ctx, id, title, content).await?
        }
        Commands::Search { query, id } => {
            handlers::search::handle_search(&mut ctx, query, id).await?
        }
        Commands::Export { output, staging } => {
            handlers::backup::handle_export(&mut ctx, output, staging).await?
        }
        Commands::Import { path } => handlers::backup::handle_import(&mut ctx, path).await?,
        Commands::Completions { .. } => unreachable!("handled before loading the list"),
    }

    Ok(())
}

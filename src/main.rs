use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taproom::app::AppContext;
use taproom::cli::{commands, Cli, Commands};
use taproom::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file.
    if matches!(cli.command, Commands::Tui) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(AppContext::log_file_path()?)?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
            .with(EnvFilter::from_default_env())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::List { json } => {
            commands::list_items(&ctx, json, &mut std::io::stdout()).await?;
        }
        Commands::Show { id } => {
            commands::show_item(&ctx, id, &mut std::io::stdout()).await?;
        }
        Commands::Tui => {
            taproom::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}

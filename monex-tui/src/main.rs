mod app;
mod backend;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::Result;
use app::App;
use backend::Backend;
use clap::Parser;
use cli::{Cli, Commands};
use config::MonexConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env.monex
    dotenvy::from_filename(".env.monex").ok();

    let cli = Cli::parse();
    let cfg = MonexConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = MonexConfig::config_path()?;
            if !path.exists() {
                MonexConfig::default().save()?;
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Dev => {
            logging::init(&cfg)?;
            run(&cfg, Backend::dev()).await
        }
        Commands::Run => {
            logging::init(&cfg)?;
            run(&cfg, Backend::file(cfg.file_store()?)).await
        }
    }
}

async fn run(cfg: &MonexConfig, mut backend: Backend) -> Result<()> {
    let mut app = App::new(cfg);
    tracing::info!("Starting monex-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, &mut backend).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("UI loop failed: {:?}", err);
        eprintln!("Error: {:?}", err);
    }

    println!("\nGoodbye!");

    Ok(())
}

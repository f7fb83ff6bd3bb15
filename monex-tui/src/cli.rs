use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "monex-tui")]
#[command(about = "Terminal client for Monex registration and login")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run with the registered user stored on disk (default)
    Run,
    /// Run in dev mode with an in-memory store
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

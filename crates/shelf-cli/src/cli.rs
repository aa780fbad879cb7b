use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shelf",
    about = "Shelf — a small book-lending tracker",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Book server URL (defaults to $SHELF_SERVER_URL, then http://localhost:8080)
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the book server
    Serve(ServeArgs),
    /// List every book
    List,
    /// Search books by name
    Search(SearchArgs),
    /// Add a book
    Add(AddArgs),
    /// Change a book's lending status
    Update(UpdateArgs),
    /// Interactive session: add, search and update against one view
    Shell,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Allowed CORS origin; repeat for several (overrides the config file)
    #[arg(long = "origin")]
    pub origins: Vec<String>,
    /// Start with an empty catalogue
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    pub keyword: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Book name; several words are joined with spaces
    #[arg(required = true)]
    pub name: Vec<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: String,
    /// in-stock, on-loan or returned
    pub status: String,
}

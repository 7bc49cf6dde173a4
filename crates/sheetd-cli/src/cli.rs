use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sheetd",
    about = "sheetd — a JSON-file-backed tabular dataset over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print the stored dataset without starting a server
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind the listener to
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path of the JSON backing document
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path of the JSON backing document
    #[arg(long, default_value = "database.json")]
    pub data_file: PathBuf,
}

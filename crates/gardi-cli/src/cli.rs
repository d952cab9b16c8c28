use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gardi",
    about = "Gardi — multi-tenant JSON document backend",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP document server
    Serve(ServeArgs),
    /// List document ids under a collection and user
    List(ListArgs),
    /// Print a stored document
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Document store root (overrides the config file)
    #[arg(long)]
    pub data_root: Option<PathBuf>,
    /// TOML config file to load settings from
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Collection name ("schemas" or "instances")
    pub collection: String,
    /// User namespace
    pub user: String,
    #[arg(long, default_value = "./data")]
    pub data_root: PathBuf,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Collection name ("schemas" or "instances")
    pub collection: String,
    /// User namespace
    pub user: String,
    /// Document id
    pub id: String,
    #[arg(long, default_value = "./data")]
    pub data_root: PathBuf,
}

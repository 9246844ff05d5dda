use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "artifact-db",
    about = "Artifact catalog: an in-memory store served over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the snapshot, serve HTTP, and save the snapshot on shutdown
    Serve(ServeArgs),
    /// Summarize the contents of a snapshot file
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Config file (TOML); missing file means defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Listen address, overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Snapshot file, overrides the config file
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Snapshot file; defaults to the configured data file
    #[arg(long)]
    pub data: Option<PathBuf>,
}

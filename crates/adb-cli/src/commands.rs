use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use adb_server::{ArtifactServer, ServerConfig, DEFAULT_CONFIG_PATH};
use adb_store::Snapshot;
use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Inspect(args) => cmd_inspect(args, &cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    ServerConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid --bind address {bind}"))?;
    }
    if let Some(data) = args.data {
        config.data_file = data;
    }
    tracing::info!(
        bind = %config.bind_addr,
        data_file = %config.data_file.display(),
        "starting artifact-db"
    );

    let server = ArtifactServer::open(config).context("failed to load snapshot")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(server.serve())
        .context("server did not shut down cleanly")?;
    Ok(())
}

/// Counts over a snapshot, keyed by display name.
#[derive(Debug, Default, PartialEq)]
struct Summary {
    total: usize,
    by_type: BTreeMap<String, usize>,
    by_set: BTreeMap<String, usize>,
    invalid: Vec<(String, String)>,
}

fn summarize(snapshot: &Snapshot) -> Summary {
    let mut summary = Summary {
        total: snapshot.len(),
        ..Default::default()
    };
    for artifact in snapshot.artifacts.values() {
        *summary.by_type.entry(artifact.artifact_type().to_string()).or_default() += 1;
        *summary.by_set.entry(artifact.set().to_string()).or_default() += 1;
    }
    summary.invalid = snapshot
        .invalid_entries()
        .into_iter()
        .map(|(id, err)| (id.to_string(), err.to_string()))
        .collect();
    summary
}

fn cmd_inspect(args: InspectArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let path: PathBuf = match args.data {
        Some(data) => data,
        None => load_config(args.config.as_deref())?.data_file,
    };
    let snapshot =
        Snapshot::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let summary = summarize(&snapshot);

    match format {
        OutputFormat::Json => {
            let invalid: Vec<_> = summary
                .invalid
                .iter()
                .map(|(id, err)| json!({ "id": id, "error": err }))
                .collect();
            let doc = json!({
                "path": path.display().to_string(),
                "total": summary.total,
                "by_type": summary.by_type,
                "by_set": summary.by_set,
                "invalid": invalid,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            println!(
                "Snapshot {}: {} artifacts",
                path.display().to_string().bold(),
                summary.total.to_string().bold()
            );
            println!("\n{}", "By type".underline());
            for (slot, count) in &summary.by_type {
                println!("  {:<24} {}", slot.cyan(), count);
            }
            println!("\n{}", "By set".underline());
            for (set, count) in &summary.by_set {
                println!("  {:<24} {}", set.yellow(), count);
            }
            if summary.invalid.is_empty() {
                println!("\n{} All entries pass validation", "✓".green().bold());
            } else {
                println!(
                    "\n{} {} entries fail validation:",
                    "✗".red().bold(),
                    summary.invalid.len()
                );
                for (id, err) in &summary.invalid {
                    println!("  {} {}", id.red(), err);
                }
            }
        }
    }
    Ok(())
}

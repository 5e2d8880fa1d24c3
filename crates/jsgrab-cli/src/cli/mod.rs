//! CLI for the jsgrab JS URL extraction tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jsgrab_core::config;
use std::path::PathBuf;

use commands::{run_extract, run_fetch, run_full};

/// Top-level CLI for jsgrab.
#[derive(Debug, Parser)]
#[command(name = "jsgrab")]
#[command(about = "Extract JS URLs from captured traffic and fetch them for offline review", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract JS URLs from a HAR capture and write the URL list.
    Extract {
        /// Path to the HAR 1.2 capture file.
        #[arg(long)]
        har: PathBuf,

        /// Output directory for the URL list.
        #[arg(long)]
        out: PathBuf,

        /// Scope origin override; defaults to the first entry's origin.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Fetch every URL from an existing (optionally hand-edited) list.
    Fetch {
        /// Path to a previously written URL list.
        #[arg(long)]
        list: PathBuf,

        /// Output directory for the downloaded files.
        #[arg(long)]
        out: PathBuf,
    },

    /// Extract, persist the URL list, and fetch in one go.
    Run {
        /// Path to the HAR 1.2 capture file.
        #[arg(long)]
        har: PathBuf,

        /// Output directory for the URL list and downloaded files.
        #[arg(long)]
        out: PathBuf,

        /// Scope origin override; defaults to the first entry's origin.
        #[arg(long)]
        base_url: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { har, out, base_url } => {
                run_extract(&har, &out, base_url.as_deref(), &cfg)
            }
            CliCommand::Fetch { list, out } => run_fetch(&list, &out, &cfg),
            CliCommand::Run { har, out, base_url } => {
                run_full(&har, &out, base_url.as_deref(), &cfg)
            }
        }
    }
}

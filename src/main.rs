//! # Glyph Codex CLI (`codex`)
//!
//! The `codex` binary is the terminal interface to a glyph codex backend.
//!
//! ## Usage
//!
//! ```bash
//! codex --config ./config/codex.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `codex search "<term>"` | Search the glyph collection |
//! | `codex categories` | List category facets with counts |
//! | `codex ideals` | List the thematic principles |
//! | `codex stats` | Catalogue overview |
//! | `codex browse` | Interactive debounced search session |
//!
//! ## Examples
//!
//! ```bash
//! # Everything in the Life category
//! codex search "" --category Life
//!
//! # Text search across all descriptive fields
//! codex search "eternal"
//!
//! # Interactive session
//! codex browse
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use glyph_codex::{browse, categories, config, ideals, search, stats};

/// Glyph Codex — a terminal client for a glyph codex service.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/codex.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "codex",
    about = "Glyph Codex — browse and search a catalogue of symbolic glyph records",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/codex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Search the glyph collection.
    ///
    /// Case-insensitive substring search across every descriptive field,
    /// optionally narrowed to an exact category facet. An empty term with
    /// no category lists the whole collection.
    Search {
        /// The search term. May be empty.
        #[arg(default_value = "")]
        term: String,

        /// Keep only glyphs whose category equals this value exactly
        /// (case-sensitive; facet values come from `codex categories`).
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of glyph cards to print.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List category facets derived from the glyph collection.
    Categories,

    /// List the thematic ideal principles.
    Ideals {
        /// Also print each ideal's derived keywords.
        #[arg(long)]
        keywords: bool,
    },

    /// Show catalogue statistics.
    Stats,

    /// Start an interactive search session with debounced input.
    ///
    /// Plain lines search; `/category <name>` selects a facet, `/ideals`
    /// shows the principles, `/stats` the session counters, `/quit` exits.
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Search {
            term,
            category,
            limit,
        } => {
            search::run_search(&cfg, &term, category, limit).await?;
        }
        Commands::Categories => {
            categories::run_categories(&cfg).await?;
        }
        Commands::Ideals { keywords } => {
            ideals::run_ideals(&cfg, keywords).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
        Commands::Browse => {
            browse::run_browse(&cfg).await?;
        }
    }

    Ok(())
}

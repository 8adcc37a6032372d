//! Top-level command definitions for the CLI.
//!
//! Each variant maps to one handler module in [`crate::handlers`]. Doc
//! comments double as the `--help` text.

use std::path::PathBuf;

use clap::Subcommand;
use wares_axum::bootstrap::{DEFAULT_DATA_FILE, DEFAULT_PORT};

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the catalog HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "WARES_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Path to the JSON file backing the catalog
        #[arg(long = "data-file", env = "WARES_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,

        /// Runtime environment: "development" or "production"
        #[arg(long, env = "WARES_ENV", default_value = "development")]
        environment: String,

        /// Serve a frontend build from this directory with SPA fallback
        #[arg(long = "static-dir")]
        static_dir: Option<PathBuf>,

        /// Restrict CORS to this origin (repeatable; default allows all)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origin: Vec<String>,

        /// Override the stats cache TTL in seconds
        #[arg(long = "stats-ttl", value_name = "SECONDS")]
        stats_ttl: Option<u64>,
    },

    /// List one page of catalog items
    List {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Items per page (the server caps this at 10)
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Case-insensitive search over item name and category
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single item in full
    Show {
        /// ID of the item to display
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },

    /// Add an item to the catalog
    Add {
        /// Item name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Item category (prompted for when omitted)
        #[arg(long)]
        category: Option<String>,

        /// Item price (prompted for when omitted)
        #[arg(long)]
        price: Option<f64>,
    },

    /// Show catalog statistics
    Stats {
        /// Recompute the stats instead of accepting a cached snapshot
        #[arg(long)]
        refresh: bool,
    },

    /// Browse the catalog interactively
    Browse {
        /// Visible rows in the item window
        #[arg(long, default_value_t = 10)]
        height: usize,

        /// Items fetched per page (the server caps this at 10)
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

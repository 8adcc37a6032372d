//! Handler for the `serve` command.

use std::path::PathBuf;
use std::time::Duration;

use wares_axum::{Environment, ServerConfig, start_server};

use crate::error::CliError;

/// Parsed arguments for the serve command.
pub struct ServeArgs {
    pub port: u16,
    pub data_file: PathBuf,
    pub environment: String,
    pub static_dir: Option<PathBuf>,
    pub allow_origin: Vec<String>,
    pub stats_ttl: Option<u64>,
}

/// Run the catalog server until interrupted.
pub async fn execute(args: ServeArgs) -> Result<(), CliError> {
    let config = build_config(args);

    print_banner(&config);

    start_server(config)
        .await
        .map_err(|err| CliError::Server(err.to_string()))
}

/// Assemble the server configuration from CLI arguments.
fn build_config(args: ServeArgs) -> ServerConfig {
    let mut config = ServerConfig::new(args.port, args.data_file)
        .with_environment(Environment::from(args.environment.as_str()));

    if let Some(dir) = args.static_dir {
        config = config.with_static_dir(dir);
    }
    if !args.allow_origin.is_empty() {
        config = config.with_allowed_origins(args.allow_origin);
    }
    if let Some(secs) = args.stats_ttl {
        config = config.with_stats_ttl(Duration::from_secs(secs));
    }

    config
}

fn print_banner(config: &ServerConfig) {
    println!();
    if let Some(ref dir) = config.static_dir {
        println!("  🚀 wares server starting ({})...", config.environment);
        println!();
        println!("  📂 Serving UI from: {}", dir.display());
    } else {
        println!(
            "  🚀 wares server starting ({}, API only)...",
            config.environment
        );
    }
    println!();
    println!("  🌐 Local:   http://localhost:{}", config.port);
    println!("  🌐 Network: http://0.0.0.0:{}", config.port);
    println!();
    println!("  📄 Data file: {}", config.data_file.display());
    if config.static_dir.is_none() {
        println!();
        println!("  💡 Tip: Use --static-dir to serve a frontend build");
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();
}

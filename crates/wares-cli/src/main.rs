//! CLI entry point - argument parsing and command dispatch.
//!
//! Builds the shared client context via bootstrap, then routes to the
//! handler for the chosen command. Failures print one line to stderr and
//! exit with the code from [`CliError::exit_code`].

use clap::Parser;

use wares_cli::handlers::serve::ServeArgs;
use wares_cli::{Cli, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Pick up .env overrides before parsing, so env-backed args see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // A bare invocation prints help rather than erroring
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map_err(|err| CliError::Io(err.to_string()))?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            data_file,
            environment,
            static_dir,
            allow_origin,
            stats_ttl,
        } => {
            handlers::serve::execute(ServeArgs {
                port,
                data_file,
                environment,
                static_dir,
                allow_origin,
                stats_ttl,
            })
            .await
        }
        Commands::List { page, limit, query } => {
            let ctx = bootstrap(&cli.server)?;
            handlers::list::execute(&ctx, page, limit, query).await
        }
        Commands::Show { id } => {
            let ctx = bootstrap(&cli.server)?;
            handlers::show::execute(&ctx, id).await
        }
        Commands::Add {
            name,
            category,
            price,
        } => {
            let ctx = bootstrap(&cli.server)?;
            handlers::add::execute(&ctx, name, category, price).await
        }
        Commands::Stats { refresh } => {
            let ctx = bootstrap(&cli.server)?;
            handlers::stats::execute(&ctx, refresh).await
        }
        Commands::Browse { height, limit } => {
            let ctx = bootstrap(&cli.server)?;
            handlers::browse::execute(&ctx, height, limit).await
        }
    }
}

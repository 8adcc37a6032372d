//! The root argument parser.

use clap::Parser;

use crate::commands::Commands;

/// The `wares` command line: global options plus one subcommand.
#[derive(Parser)]
#[command(name = "wares")]
#[command(about = "Browse and manage a JSON-backed item catalog")]
#[command(version)]
pub struct Cli {
    /// Base URL of the catalog server used by client commands
    #[arg(
        long = "server",
        global = true,
        env = "WARES_SERVER",
        default_value = wares_client::DEFAULT_SERVER
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_server_arg() {
        let cli = Cli::parse_from(["wares", "--server", "http://example.org:8080", "stats"]);
        assert_eq!(cli.server, "http://example.org:8080");
    }

    #[test]
    fn test_server_arg_accepted_after_subcommand() {
        let cli = Cli::parse_from(["wares", "list", "--server", "http://example.org:8080"]);
        assert_eq!(cli.server, "http://example.org:8080");
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::parse_from(["wares", "list", "--page", "3", "--limit", "5", "-q", "widget"]);
        let Some(Commands::List { page, limit, query }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(page, 3);
        assert_eq!(limit, 5);
        assert_eq!(query.as_deref(), Some("widget"));
    }

    #[test]
    fn test_serve_flags_parse() {
        let cli = Cli::parse_from([
            "wares",
            "serve",
            "--port",
            "5000",
            "--data-file",
            "/tmp/items.json",
            "--environment",
            "production",
            "--allow-origin",
            "https://a.example",
            "--allow-origin",
            "https://b.example",
        ]);
        let Some(Commands::Serve {
            port,
            data_file,
            environment,
            allow_origin,
            static_dir,
            stats_ttl,
        }) = cli.command
        else {
            panic!("expected serve command");
        };
        assert_eq!(port, 5000);
        assert_eq!(data_file, std::path::PathBuf::from("/tmp/items.json"));
        assert_eq!(environment, "production");
        assert_eq!(allow_origin.len(), 2);
        assert!(static_dir.is_none());
        assert!(stats_ttl.is_none());
    }

    #[test]
    fn test_show_rejects_non_positive_ids() {
        assert!(Cli::try_parse_from(["wares", "show", "0"]).is_err());
        assert!(Cli::try_parse_from(["wares", "show", "abc"]).is_err());

        let cli = Cli::parse_from(["wares", "show", "7"]);
        let Some(Commands::Show { id }) = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(id, 7);
    }
}

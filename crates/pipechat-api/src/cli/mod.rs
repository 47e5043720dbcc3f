//! CLI definitions for the `pipechat` binary.
//!
//! All settings can also come from the environment (or a `.env` file), so a
//! bare `pipechat serve` is enough in a configured deployment.

pub mod config;

use clap::{Parser, Subcommand};

pub use config::AppConfig;

/// Pipedrive contacts dashboard with an AI chat assistant.
#[derive(Parser)]
#[command(name = "pipechat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "PIPECHAT_PORT", default_value_t = 3000)]
        port: u16,

        /// Host address to bind to.
        #[arg(long, env = "PIPECHAT_HOST", default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the Pipedrive consent URL for the configured OAuth app.
    AuthUrl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from(["pipechat", "-vv", "serve", "--port", "8080"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve { port, .. } => assert_eq!(port, 8080),
            Commands::AuthUrl => panic!("expected serve"),
        }
    }
}

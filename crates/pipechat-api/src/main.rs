//! Pipechat web server entry point.
//!
//! Binary name: `pipechat`
//!
//! Loads `.env`, parses CLI arguments, wires the Pipedrive and OpenAI
//! adapters into the application state, then serves the router.

mod cli;
mod http;
mod state;

use clap::Parser;
use pipechat_core::auth::provider::OAuthProvider;
use pipechat_infra::pipedrive::PipedriveOAuthClient;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so clap's `env` lookups see the file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Serve { port, host } => {
            cli.config.warn_missing();
            let state = AppState::init(&cli.config)?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "pipechat listening");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::AuthUrl => {
            let client = pipechat_infra::http_client(std::time::Duration::from_secs(
                cli.config.http_timeout_secs,
            ))?;
            let oauth = PipedriveOAuthClient::new(client, cli.config.oauth());
            println!("{}", oauth.authorization_url());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8, json: bool) {
    let default = match verbose {
        0 => "warn,pipechat=info",
        1 => "info,pipechat=debug,tower_http=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! Haven JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info, warn};

use haven_app::context::{AppContext, TokenSettings};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod bookings;
mod config;
mod envelope;
mod extensions;
mod healthcheck;
mod observability;
mod properties;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod users;

/// Haven JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, eprintln is all that is left"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let tokens = TokenSettings {
        secret: config.auth.jwt_key.as_bytes(),
        ttl_seconds: config.auth.token_ttl_seconds(),
    };

    let app = match AppContext::connect(&config.database.database_url, tokens).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error:?}");

            process::exit(1);
        }
    };

    if config.auth.legacy_account_compat {
        warn!(
            "legacy account compatibility is on: password resets skip token checks \
             and identity lookups return password hashes"
        );
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let state = State::shared(app.clone(), config.auth.legacy_account_compat);
    let service = router::service(router::app_router(state, &config.server.uploads_dir));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;

    app.close().await;

    info!("server stopped, connection pool closed");
}

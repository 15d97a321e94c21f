mod config;
mod errors;
mod models;
mod nav;
mod parser_client;
mod routes;
mod session;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::parser_client::ParserClient;
use crate::routes::build_router;
use crate::session::store::TracingTitleObserver;
use crate::session::{SessionRegistry, SimulatedSignupGateway};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentAI API v{}", env!("CARGO_PKG_VERSION"));

    // Session registry: every browser tab gets one in-memory store. The
    // simulated signup gateway stands in for the account backend.
    let sessions = Arc::new(SessionRegistry::new(
        Arc::new(SimulatedSignupGateway),
        Arc::new(TracingTitleObserver),
    ));
    info!("Session registry initialized");

    // Client for the external resume-parsing service
    let parser = ParserClient::new(config.parser_url.clone());
    info!("Resume parser client initialized (upstream: {})", config.parser_url);

    // Build app state
    let state = AppState {
        sessions,
        parser,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

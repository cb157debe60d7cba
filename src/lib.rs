//! Daily-poll demo: one active poll, form-posted votes, live tallies.
//!
//! An admin creates the poll at `/admin` (question plus comma-separated
//! options), visitors vote on `/`, and every mutation invalidates the
//! externally cached `results` key. Pages are rendered server-side with
//! Tera and carry the serving instance's hostname and address.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod instance;
pub mod models;
pub mod poll;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    info!(ttl = config.cache_ttl, "cache TTL configured");

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to the database");
    db::ensure_schema(&pool)
        .await
        .expect("Failed to ensure the database schema");

    let cache = cache::connect(&config.redis_url())
        .await
        .expect("Failed to connect to the cache");

    let templates = tera::Tera::new("templates/**/*.html").expect("Failed to load templates");
    let instance = instance::lookup();
    info!(instance = %instance.instance, ip = %instance.ip, "instance identity");

    let state = Arc::new(AppState {
        pool,
        cache,
        templates,
        instance,
    });
    let app = routes::create_routes(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind listen address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

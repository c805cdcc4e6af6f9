//! Feed API Server
//!
//! Assembles the home feed of a content platform: posts, billboard slots and
//! the followed-podcasts block merged into one ordered list.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::UpstreamClient;
use app::FeedService;
use config::Config;
use domain::ports::{BillboardSource, PodcastSource, PostSource};

/// Feed service over type-erased sources, so handlers can be driven by any adapter
pub type DynFeedService = FeedService<dyn PostSource, dyn BillboardSource, dyn PodcastSource>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<DynFeedService>,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostSource>,
        billboards: Arc<dyn BillboardSource>,
        podcasts: Arc<dyn PodcastSource>,
    ) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(posts, billboards, podcasts)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes and shared middleware, without rate limiting
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/feed", get(handlers::get_feed))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting feed API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Create adapters
    let upstream = Arc::new(
        UpstreamClient::new(config.upstream_url.clone(), config.fetch_timeout)
            .context("Failed to build upstream client")?,
    );
    let podcasts = Arc::new(
        config
            .podcast_source()
            .context("Failed to load podcast page state")?,
    );
    tracing::info!(
        upstream = %config.upstream_url,
        podcast_episodes = podcasts.episode_count(),
        "Sources configured"
    );

    let state = AppState::new(upstream.clone(), upstream, podcasts);

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}

//! # tunedeck: a playlist backend with token-based sessions
//!
//! `tunedeck` is a small HTTP backend for a music playlist client. Users log
//! in with a username and password, receive an opaque session token, and use
//! that token on every subsequent request to manage their playlists and the
//! tracks inside them.
//!
//! ## Request Flow
//!
//! `POST /login` validates the submitted credentials against the account
//! store (passwords are compared as SHA3-512 hex digests) and registers a
//! fresh random token in the in-process session registry. Every other route
//! takes that token as a `token` query parameter. The handler resolves it to
//! a user identity, checks playlist ownership where the route touches a
//! specific playlist, and only then delegates to storage.
//!
//! Authorization is fail-closed: an unknown token answers `404`, a token that
//! resolves to someone other than the playlist's owner answers `401` with an
//! empty body, and any storage hiccup during an ownership check denies access
//! rather than guessing.
//!
//! ## Core Components
//!
//! The **API layer** ([`api`]) holds the Axum handlers and the request and
//! response DTOs. Handlers stay thin and push every security decision into
//! the auth core.
//!
//! The **auth core** ([`auth`]) owns credential validation, token
//! generation, the session registry, and the ownership gate.
//!
//! The **storage layer** ([`store`]) defines narrow async traits for the
//! queries the rest of the crate needs, plus an in-memory implementation
//! seeded from configuration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use tunedeck::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = tunedeck::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     tunedeck::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
mod openapi;
pub mod store;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use bon::Builder;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};
use utoipa::OpenApi;

use crate::auth::{access::AccessController, credentials::CredentialValidator, session::SessionStore, token::TokenGenerator};
use crate::openapi::ApiDoc;
use crate::store::{MemoryStore, PlaylistStore, TrackStore};

pub use config::Config;
pub use types::{NO_USER, PlaylistId, TrackId, UserId};

/// Application state shared across all request handlers.
///
/// Carries the configuration, the auth core, and the storage trait objects
/// the handlers delegate to.
#[derive(Clone, Builder)]
pub struct AppState {
    pub config: Config,
    pub credentials: Arc<CredentialValidator>,
    pub sessions: Arc<SessionStore>,
    pub access: Arc<AccessController>,
    pub playlists: Arc<dyn PlaylistStore>,
    pub tracks: Arc<dyn TrackStore>,
}

impl AppState {
    /// Wire the auth core and the handler-facing trait objects around a
    /// single in-memory store.
    pub fn from_store(config: Config, store: Arc<MemoryStore>) -> Self {
        let sessions = Arc::new(SessionStore::new(TokenGenerator::new()));
        let access = Arc::new(AccessController::new(sessions.clone(), store.clone()));

        Self::builder()
            .config(config)
            .credentials(Arc::new(CredentialValidator::new(store.clone())))
            .sessions(sessions)
            .access(access)
            .playlists(store.clone())
            .tracks(store)
            .build()
    }
}

/// Build the application router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(api::handlers::auth::login))
        .route("/playlists", get(api::handlers::playlists::get_playlists))
        .route("/playlists", post(api::handlers::playlists::create_playlist))
        .route("/playlists/{id}", put(api::handlers::playlists::edit_playlist))
        .route("/playlists/{id}", delete(api::handlers::playlists::delete_playlist))
        .route("/playlists/{id}/tracks", get(api::handlers::playlists::get_playlist_tracks))
        .route("/playlists/{id}/tracks", post(api::handlers::playlists::add_track_to_playlist))
        .route(
            "/playlists/{id}/tracks/{track_id}",
            delete(api::handlers::playlists::remove_track_from_playlist),
        )
        .route("/tracks", get(api::handlers::tracks::get_available_tracks))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}

/// The assembled server: a router bound to a TCP listener.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] seeds the store from configuration,
///    wires the state, and binds the listening socket
/// 2. **Serve**: [`Application::serve`] handles requests until the shutdown
///    future resolves
pub struct Application {
    router: Router,
    listener: TcpListener,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(MemoryStore::from_config(&config));
        let bind_addr = config.bind_address();
        let state = AppState::from_store(config, store);
        let router = build_router(state);

        let listener = TcpListener::bind(&bind_addr).await?;
        info!("tunedeck listening on http://{bind_addr}");

        Ok(Self { router, listener })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Shutdown complete");
        Ok(())
    }
}

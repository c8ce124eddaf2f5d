//! # vitbot_api
//!
//! HTTP API library for VIT Bot.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vitbot_core::completion::{CompletionApi, CompletionError, PerplexityClient};

use crate::config::ApiConfig;
use crate::handlers::chat;

/// Route of the chat relay endpoint.
pub const CHAT_ROUTE: &str = "/api/chat";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Completion API backend.
    pub completion: Arc<dyn CompletionApi>,
}

impl AppState {
    /// State backed by the real completion API client.
    pub fn new(config: ApiConfig) -> Result<Self, CompletionError> {
        let client = PerplexityClient::new(config.completion.clone())?;
        Ok(Self::with_completion(config, Arc::new(client)))
    }

    /// State backed by an arbitrary completion backend.
    pub fn with_completion(config: ApiConfig, completion: Arc<dyn CompletionApi>) -> Self {
        Self { config, completion }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// Paths other than the API are served from `config.static_dir`, so `GET /`
/// returns its `index.html`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(CHAT_ROUTE, post(chat::chat_handler))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

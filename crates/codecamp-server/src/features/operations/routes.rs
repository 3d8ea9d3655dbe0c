use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::options,
    Router,
};

use crate::api::response::error_response;
use crate::config::Config;
use crate::features::AppState;

pub fn operations_routes() -> Router<AppState> {
    Router::new().route("/reloadconfig", options(reload_config))
}

/// Re-reads configuration from the environment and swaps it into the
/// shared handle. Connection pool settings take effect on restart; the
/// rest is visible to readers immediately.
#[tracing::instrument(skip(state))]
async fn reload_config(State(state): State<AppState>) -> Response {
    match Config::load() {
        Ok(config) => {
            let mut guard = state.config.write().unwrap_or_else(|e| e.into_inner());
            *guard = config;
            drop(guard);

            tracing::info!("Configuration reloaded");
            StatusCode::OK.into_response()
        },
        Err(err) => {
            tracing::error!("Configuration reload failed: {err:#}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration could not be reloaded",
            )
        },
    }
}

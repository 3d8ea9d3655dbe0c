//! Feature modules implementing the CodeCamp API
//!
//! Each feature is a vertical slice with its own commands, queries, and
//! routes:
//!
//! - **camps**: CRUD and date search for camps (versioned surface)
//! - **talks**: CRUD for talks nested under a camp
//! - **operations**: administrative endpoints (config reload)
//!
//! Commands and queries are plain async `handle` functions taking the
//! data-access gateway, so they can be exercised against any
//! [`crate::store::CampStore`] implementation.

pub mod camps;
pub mod operations;
pub mod talks;

use axum::Router;

use crate::config::SharedConfig;
use crate::store::SharedStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct AppState {
    /// Data-access gateway for camps, talks, and speakers
    pub store: SharedStore,
    /// Live configuration, swappable by the operations endpoint
    pub config: SharedConfig,
}

/// Creates the `/api`-rooted router with all feature routes mounted
///
/// The camps surface is versioned: `/v1` and `/v1.0` serve the baseline
/// operations, `/v1.1` additionally serves lookup by moniker. Talks and
/// operations are unversioned.
pub fn router(state: AppState) -> Router<()> {
    Router::new()
        .nest(
            "/v1/camps",
            camps::camps_routes(camps::ApiVersion::V1_0).with_state(state.clone()),
        )
        .nest(
            "/v1.0/camps",
            camps::camps_routes(camps::ApiVersion::V1_0).with_state(state.clone()),
        )
        .nest(
            "/v1.1/camps",
            camps::camps_routes(camps::ApiVersion::V1_1).with_state(state.clone()),
        )
        .nest(
            "/camps/:moniker/talks",
            talks::talks_routes().with_state(state.clone()),
        )
        .nest("/operations", operations::operations_routes().with_state(state))
}

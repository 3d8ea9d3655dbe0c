//! Get camp by moniker query (v1.1 surface)

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::camp_to_model;
use crate::models::CampModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCampQuery {
    pub moniker: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetCampError {
    /// No camp exists with the requested moniker
    #[error("Camp '{0}' not found")]
    NotFound(String),
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(moniker = %query.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    query: GetCampQuery,
) -> Result<CampModel, GetCampError> {
    let camp = store
        .get_camp(&query.moniker)
        .await?
        .ok_or(GetCampError::NotFound(query.moniker))?;

    Ok(camp_to_model(&camp))
}

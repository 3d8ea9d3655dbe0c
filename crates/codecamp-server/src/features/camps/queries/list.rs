//! List camps query
//!
//! Returns every camp, optionally with nested talks. A data-layer
//! failure fails the whole request; a partial list is never returned.

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::camp_to_model;
use crate::models::CampModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCampsQuery {
    pub include_talks: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ListCampsError {
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CampStore,
    query: ListCampsQuery,
) -> Result<Vec<CampModel>, ListCampsError> {
    let camps = store.get_all_camps(query.include_talks).await?;

    Ok(camps.iter().map(camp_to_model).collect())
}

//! List talks query

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::talk_to_model;
use crate::models::TalkModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTalksQuery {
    pub moniker: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ListTalksError {
    /// No camp exists with the requested moniker
    #[error("Camp '{0}' not found")]
    CampNotFound(String),
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(moniker = %query.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    query: ListTalksQuery,
) -> Result<Vec<TalkModel>, ListTalksError> {
    if store.get_camp(&query.moniker).await?.is_none() {
        return Err(ListTalksError::CampNotFound(query.moniker));
    }

    let talks = store.get_talks_by_moniker(&query.moniker).await?;

    tracing::debug!(count = talks.len(), "Fetched talks");

    Ok(talks.iter().map(talk_to_model).collect())
}

//! Search camps by event date
//!
//! An empty result set is reported as not-found rather than an empty
//! 200 list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::camp_to_model;
use crate::models::CampModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCampsQuery {
    pub date: NaiveDate,
    pub include_talks: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchCampsError {
    /// No camp starts on the requested date
    #[error("No camps found with an event date of {0}")]
    NoMatches(NaiveDate),
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(date = %query.date))]
pub async fn handle(
    store: &dyn CampStore,
    query: SearchCampsQuery,
) -> Result<Vec<CampModel>, SearchCampsError> {
    let camps = store
        .get_camps_by_event_date(query.date, query.include_talks)
        .await?;

    if camps.is_empty() {
        return Err(SearchCampsError::NoMatches(query.date));
    }

    Ok(camps.iter().map(camp_to_model).collect())
}

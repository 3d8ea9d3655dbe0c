//! Get talk query

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::talk_to_model;
use crate::models::TalkModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTalkQuery {
    pub moniker: String,
    pub talk_id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetTalkError {
    /// No talk with this id exists within the camp
    #[error("Talk {talk_id} not found in camp '{moniker}'")]
    NotFound { moniker: String, talk_id: i32 },
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(moniker = %query.moniker, talk_id = query.talk_id))]
pub async fn handle(store: &dyn CampStore, query: GetTalkQuery) -> Result<TalkModel, GetTalkError> {
    let talk = store
        .get_talk_by_moniker(&query.moniker, query.talk_id)
        .await?
        .ok_or(GetTalkError::NotFound {
            moniker: query.moniker,
            talk_id: query.talk_id,
        })?;

    Ok(talk_to_model(&talk))
}

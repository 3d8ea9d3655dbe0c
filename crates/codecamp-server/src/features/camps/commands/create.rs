//! Create camp command
//!
//! Rejects duplicate monikers and monikers for which no canonical URL
//! can be derived before persisting; the created resource's canonical
//! URL is returned for the `Location` header.

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::links::{canonical_url, LinkError, Resource};
use crate::mapping::{camp_from_model, camp_to_model};
use crate::models::CampModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampCommand {
    pub model: CampModel,
}

/// The created camp and its canonical URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampResponse {
    pub model: CampModel,
    pub location: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCampError {
    /// A camp with this moniker already exists
    #[error("Moniker already Exists")]
    DuplicateMoniker(String),
    /// No canonical URL can be derived for the moniker
    #[error("Could not use current moniker")]
    InvalidMoniker(#[from] LinkError),
    /// The write affected no rows
    #[error("Failed to save new camp")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(DbError),
}

#[tracing::instrument(skip(store, command), fields(moniker = %command.model.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    command: CreateCampCommand,
) -> Result<CreateCampResponse, CreateCampError> {
    let moniker = command.model.moniker.clone();

    let existing = store
        .get_camp(&moniker)
        .await
        .map_err(CreateCampError::Database)?;
    if existing.is_some() {
        return Err(CreateCampError::DuplicateMoniker(moniker));
    }

    let location = canonical_url(Resource::Camp { moniker: &moniker })?;

    let new_camp = camp_from_model(&command.model);
    let id = store.add_camp(&new_camp).await.map_err(|e| match e {
        // The moniker check above races against concurrent creates
        DbError::Duplicate(_) => CreateCampError::DuplicateMoniker(moniker.clone()),
        other => CreateCampError::Database(other),
    })?;

    let camp = new_camp.into_camp(id);
    tracing::info!(camp_id = id, moniker = %camp.moniker, "Camp created");

    Ok(CreateCampResponse {
        model: camp_to_model(&camp),
        location,
    })
}

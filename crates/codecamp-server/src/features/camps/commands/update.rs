//! Update camp command
//!
//! Overlays the supplied wire fields onto the existing record. An
//! unknown moniker is a client error on this surface, not a 404.

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::{apply_camp_model, camp_to_model};
use crate::models::CampModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCampCommand {
    pub moniker: String,
    pub model: CampModel,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCampError {
    /// No camp exists with the requested moniker
    #[error("Camp with moniker '{0}' does not exist")]
    UnknownMoniker(String),
    /// The write affected no rows
    #[error("Failed to update camp")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store, command), fields(moniker = %command.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    command: UpdateCampCommand,
) -> Result<CampModel, UpdateCampError> {
    let mut camp = store
        .get_camp(&command.moniker)
        .await?
        .ok_or(UpdateCampError::UnknownMoniker(command.moniker))?;

    apply_camp_model(&mut camp, &command.model);

    let rows = store.update_camp(&camp).await?;
    if rows == 0 {
        return Err(UpdateCampError::SaveFailed);
    }

    tracing::info!(moniker = %camp.moniker, "Camp updated");

    Ok(camp_to_model(&camp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, NewCamp};
    use crate::store::memory::MemoryCampStore;

    async fn seed_camp(store: &MemoryCampStore) {
        store
            .add_camp(&NewCamp {
                moniker: "atl2024".to_string(),
                name: "Atlanta Code Camp".to_string(),
                description: Some("Original description".to_string()),
                event_date_start: None,
                event_date_end: None,
                location: Location::default(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_handle_overlays_fields() {
        let store = MemoryCampStore::new();
        seed_camp(&store).await;

        let command = UpdateCampCommand {
            moniker: "atl2024".to_string(),
            model: CampModel {
                moniker: "atl2024".to_string(),
                name: "Atlanta Code Camp 2024".to_string(),
                description: None,
                venue: Some("New Venue".to_string()),
                event_date_start: None,
                event_date_end: None,
                talks: None,
            },
        };

        let model = handle(&store, command).await.unwrap();
        assert_eq!(model.name, "Atlanta Code Camp 2024");
        assert_eq!(model.venue.as_deref(), Some("New Venue"));
        // Fields absent from the request keep their stored values
        assert_eq!(model.description.as_deref(), Some("Original description"));
    }

    #[tokio::test]
    async fn test_handle_unknown_moniker() {
        let store = MemoryCampStore::new();
        let command = UpdateCampCommand {
            moniker: "nope".to_string(),
            model: CampModel {
                moniker: "nope".to_string(),
                name: "Nope".to_string(),
                description: None,
                venue: None,
                event_date_start: None,
                event_date_end: None,
                talks: None,
            },
        };

        let result = handle(&store, command).await;
        assert!(matches!(result, Err(UpdateCampError::UnknownMoniker(_))));
    }
}

//! Delete camp command

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCampCommand {
    pub moniker: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCampError {
    /// No camp exists with the requested moniker
    #[error("Camp '{0}' not found")]
    NotFound(String),
    /// The delete affected no rows
    #[error("Failed to delete camp")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(moniker = %command.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    command: DeleteCampCommand,
) -> Result<(), DeleteCampError> {
    let existing = store.get_camp(&command.moniker).await?;
    if existing.is_none() {
        return Err(DeleteCampError::NotFound(command.moniker));
    }

    let rows = store.delete_camp(&command.moniker).await?;
    if rows == 0 {
        return Err(DeleteCampError::SaveFailed);
    }

    tracing::info!(moniker = %command.moniker, "Camp deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, NewCamp};
    use crate::store::memory::MemoryCampStore;

    #[tokio::test]
    async fn test_handle_deletes_camp() {
        let store = MemoryCampStore::new();
        store
            .add_camp(&NewCamp {
                moniker: "atl2024".to_string(),
                name: "Atlanta Code Camp".to_string(),
                description: None,
                event_date_start: None,
                event_date_end: None,
                location: Location::default(),
            })
            .await
            .unwrap();

        handle(&store, DeleteCampCommand { moniker: "atl2024".to_string() })
            .await
            .unwrap();

        // Delete-then-get returns absence
        assert!(store.get_camp("atl2024").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCampStore::new();
        let result = handle(&store, DeleteCampCommand { moniker: "nope".to_string() }).await;
        assert!(matches!(result, Err(DeleteCampError::NotFound(_))));
    }
}

//! Delete talk command

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTalkCommand {
    pub moniker: String,
    pub talk_id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteTalkError {
    /// No talk with this id exists within the camp
    #[error("Failed to find the talk to delete")]
    NotFound { moniker: String, talk_id: i32 },
    /// The delete affected no rows
    #[error("failed to delete talk")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store), fields(moniker = %command.moniker, talk_id = command.talk_id))]
pub async fn handle(
    store: &dyn CampStore,
    command: DeleteTalkCommand,
) -> Result<(), DeleteTalkError> {
    let talk = store
        .get_talk_by_moniker(&command.moniker, command.talk_id)
        .await?
        .ok_or(DeleteTalkError::NotFound {
            moniker: command.moniker.clone(),
            talk_id: command.talk_id,
        })?;

    let rows = store.delete_talk(talk.camp_id, talk.id).await?;
    if rows == 0 {
        return Err(DeleteTalkError::SaveFailed);
    }

    tracing::info!(talk_id = talk.id, moniker = %command.moniker, "Talk deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, NewCamp, NewTalk, Speaker};
    use crate::store::memory::MemoryCampStore;

    #[tokio::test]
    async fn test_handle_deletes_talk() {
        let store = MemoryCampStore::new();
        store.seed_speaker(Speaker {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: None,
            bio: None,
        });
        let camp_id = store
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
        let talk_id = store
            .add_talk(&NewTalk {
                camp_id,
                speaker_id: 1,
                title: "Engines".to_string(),
                abstract_text: None,
                level: None,
            })
            .await
            .unwrap();

        handle(
            &store,
            DeleteTalkCommand { moniker: "atl2024".to_string(), talk_id },
        )
        .await
        .unwrap();

        assert!(store
            .get_talk_by_moniker("atl2024", talk_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCampStore::new();
        let result = handle(
            &store,
            DeleteTalkCommand { moniker: "atl2024".to_string(), talk_id: 42 },
        )
        .await;
        assert!(matches!(result, Err(DeleteTalkError::NotFound { .. })));
    }
}

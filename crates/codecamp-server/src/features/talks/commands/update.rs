//! Update talk command
//!
//! Overlays the supplied wire fields onto the stored talk. A speaker
//! reference is swapped only if it resolves; an unresolvable reference
//! leaves the existing association untouched.

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::mapping::{apply_talk_model, talk_to_model};
use crate::models::TalkModel;
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTalkCommand {
    pub moniker: String,
    pub talk_id: i32,
    pub model: TalkModel,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateTalkError {
    /// No talk with this id exists within the camp
    #[error("Couldn't find the talk")]
    NotFound { moniker: String, talk_id: i32 },
    /// The write affected no rows
    #[error("Failed to update database")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store, command), fields(moniker = %command.moniker, talk_id = command.talk_id))]
pub async fn handle(
    store: &dyn CampStore,
    command: UpdateTalkCommand,
) -> Result<TalkModel, UpdateTalkError> {
    let mut talk = store
        .get_talk_by_moniker(&command.moniker, command.talk_id)
        .await?
        .ok_or(UpdateTalkError::NotFound {
            moniker: command.moniker.clone(),
            talk_id: command.talk_id,
        })?;

    apply_talk_model(&mut talk, &command.model);

    if let Some(speaker_ref) = &command.model.speaker {
        match store.get_speaker(speaker_ref.speaker_id).await? {
            Some(speaker) => talk.speaker = speaker,
            // An unresolvable reference keeps the current speaker
            None => tracing::warn!(
                speaker_id = speaker_ref.speaker_id,
                "Speaker reference did not resolve, keeping current speaker"
            ),
        }
    }

    let rows = store.update_talk(&talk).await?;
    if rows == 0 {
        return Err(UpdateTalkError::SaveFailed);
    }

    tracing::info!(talk_id = talk.id, "Talk updated");

    Ok(talk_to_model(&talk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, NewCamp, NewTalk, Speaker, SpeakerModel};
    use crate::store::memory::MemoryCampStore;

    async fn seed(store: &MemoryCampStore) -> i32 {
        store.seed_speaker(Speaker {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: None,
            bio: None,
        });
        store.seed_speaker(Speaker {
            id: 2,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
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
        store
            .add_talk(&NewTalk {
                camp_id,
                speaker_id: 1,
                title: "Engines".to_string(),
                abstract_text: None,
                level: Some(100),
            })
            .await
            .unwrap()
    }

    fn model(title: &str, speaker_id: Option<i32>) -> TalkModel {
        TalkModel {
            id: None,
            title: title.to_string(),
            abstract_text: None,
            level: None,
            speaker: speaker_id.map(|id| SpeakerModel {
                speaker_id: id,
                name: None,
                company: None,
                bio: None,
            }),
        }
    }

    #[tokio::test]
    async fn test_handle_updates_fields() {
        let store = MemoryCampStore::new();
        let talk_id = seed(&store).await;

        let updated = handle(
            &store,
            UpdateTalkCommand {
                moniker: "atl2024".to_string(),
                talk_id,
                model: model("Engines, Revisited", Some(2)),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "Engines, Revisited");
        assert_eq!(updated.speaker.as_ref().unwrap().speaker_id, 2);
        // Fields absent from the request keep their stored values
        assert_eq!(updated.level, Some(100));
    }

    #[tokio::test]
    async fn test_handle_keeps_speaker_when_unresolvable() {
        let store = MemoryCampStore::new();
        let talk_id = seed(&store).await;

        let updated = handle(
            &store,
            UpdateTalkCommand {
                moniker: "atl2024".to_string(),
                talk_id,
                model: model("Engines", Some(99)),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.speaker.as_ref().unwrap().speaker_id, 1);
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCampStore::new();
        let result = handle(
            &store,
            UpdateTalkCommand {
                moniker: "atl2024".to_string(),
                talk_id: 42,
                model: model("Missing", None),
            },
        )
        .await;
        assert!(matches!(result, Err(UpdateTalkError::NotFound { .. })));
    }
}

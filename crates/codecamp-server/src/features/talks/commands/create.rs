//! Create talk command
//!
//! A new talk must land in an existing camp and reference an existing
//! speaker; both are resolved before the insert.

use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::links::{canonical_url, LinkError, Resource};
use crate::mapping::talk_to_model;
use crate::models::{NewTalk, TalkModel};
use crate::store::CampStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTalkCommand {
    pub moniker: String,
    pub model: TalkModel,
}

/// The created talk and its canonical URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTalkResponse {
    pub model: TalkModel,
    pub location: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTalkError {
    /// No camp exists with the requested moniker
    #[error("Camp does not exist")]
    CampNotFound(String),
    /// The request carried no speaker reference
    #[error("Speaker Id is required")]
    SpeakerRequired,
    /// The referenced speaker does not exist
    #[error("Speaker could not be found")]
    SpeakerNotFound(i32),
    /// No canonical URL can be derived for the new talk
    #[error("Could not use current moniker")]
    InvalidLink(#[from] LinkError),
    /// The write affected no rows
    #[error("Failed to save new talk")]
    SaveFailed,
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(DbError),
}

#[tracing::instrument(skip(store, command), fields(moniker = %command.moniker))]
pub async fn handle(
    store: &dyn CampStore,
    command: CreateTalkCommand,
) -> Result<CreateTalkResponse, CreateTalkError> {
    let camp = store
        .get_camp(&command.moniker)
        .await
        .map_err(CreateTalkError::Database)?
        .ok_or(CreateTalkError::CampNotFound(command.moniker.clone()))?;

    let speaker_id = command
        .model
        .speaker
        .as_ref()
        .map(|s| s.speaker_id)
        .ok_or(CreateTalkError::SpeakerRequired)?;

    let speaker = store
        .get_speaker(speaker_id)
        .await
        .map_err(CreateTalkError::Database)?
        .ok_or(CreateTalkError::SpeakerNotFound(speaker_id))?;

    let new_talk = NewTalk {
        camp_id: camp.id,
        speaker_id: speaker.id,
        title: command.model.title.clone(),
        abstract_text: command.model.abstract_text.clone(),
        level: command.model.level,
    };

    let id = store
        .add_talk(&new_talk)
        .await
        .map_err(CreateTalkError::Database)?;

    let location = canonical_url(Resource::Talk {
        moniker: &command.moniker,
        id,
    })?;

    let talk = crate::models::Talk {
        id,
        camp_id: camp.id,
        title: new_talk.title,
        abstract_text: new_talk.abstract_text,
        level: new_talk.level,
        speaker,
    };

    tracing::info!(talk_id = id, moniker = %command.moniker, "Talk created");

    Ok(CreateTalkResponse {
        model: talk_to_model(&talk),
        location,
    })
}

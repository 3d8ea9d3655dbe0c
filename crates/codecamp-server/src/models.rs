//! Storage entities and wire models
//!
//! Storage entities mirror the database schema. Wire models are the
//! shapes exchanged with clients; they serialize with PascalCase field
//! names and flatten `Location.venue_name` into a single `Venue` field.
//! Conversion between the two lives in [`crate::mapping`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Storage entities
// ============================================================================

/// Venue and address details owned by a camp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A camp, identified externally by its unique moniker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    pub id: i32,
    pub moniker: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date_start: Option<NaiveDate>,
    pub event_date_end: Option<NaiveDate>,
    pub location: Location,
    /// Populated only when the caller asked for nested talks
    pub talks: Option<Vec<Talk>>,
}

/// A camp waiting to be persisted (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamp {
    pub moniker: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date_start: Option<NaiveDate>,
    pub event_date_end: Option<NaiveDate>,
    pub location: Location,
}

impl NewCamp {
    /// Attach the id assigned by the store
    pub fn into_camp(self, id: i32) -> Camp {
        Camp {
            id,
            moniker: self.moniker,
            name: self.name,
            description: self.description,
            event_date_start: self.event_date_start,
            event_date_end: self.event_date_end,
            location: self.location,
            talks: None,
        }
    }
}

/// A talk scheduled within a camp, always carrying its speaker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub id: i32,
    pub camp_id: i32,
    pub title: String,
    pub abstract_text: Option<String>,
    pub level: Option<i32>,
    pub speaker: Speaker,
}

/// A talk waiting to be persisted (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTalk {
    pub camp_id: i32,
    pub speaker_id: i32,
    pub title: String,
    pub abstract_text: Option<String>,
    pub level: Option<i32>,
}

/// A speaker referenced by talks; lifecycle managed outside this API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl Speaker {
    /// Display name as shown on the wire
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// Wire models
// ============================================================================

/// Camp as exchanged with clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CampModel {
    pub moniker: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Flattened from `Location.venue_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks: Option<Vec<TalkModel>>,
}

/// Talk as exchanged with clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TalkModel {
    /// Absent on creation, assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub title: String,
    #[serde(rename = "Abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SpeakerModel>,
}

/// Speaker reference as exchanged with clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SpeakerModel {
    pub speaker_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

//! In-memory store
//!
//! Backs handler tests and local experimentation. Mirrors the Postgres
//! implementation's semantics: moniker uniqueness, cascade delete of a
//! camp's talks, and rows-affected counts from writes.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::RwLock;

use crate::db::{DbError, DbResult};
use crate::models::{Camp, NewCamp, NewTalk, Speaker, Talk};
use crate::store::CampStore;

#[derive(Default)]
struct Inner {
    camps: Vec<Camp>,
    talks: Vec<Talk>,
    speakers: Vec<Speaker>,
    next_camp_id: i32,
    next_talk_id: i32,
}

/// Store implementation over process memory
#[derive(Default)]
pub struct MemoryCampStore {
    inner: RwLock<Inner>,
}

impl MemoryCampStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a speaker; speaker lifecycle is outside the API surface
    pub fn seed_speaker(&self, speaker: Speaker) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.speakers.push(speaker);
    }

    fn talks_for(inner: &Inner, camp_id: i32) -> Vec<Talk> {
        inner
            .talks
            .iter()
            .filter(|t| t.camp_id == camp_id)
            .cloned()
            .collect()
    }

    fn with_talks(inner: &Inner, mut camp: Camp, include_talks: bool) -> Camp {
        if include_talks {
            camp.talks = Some(Self::talks_for(inner, camp.id));
        }
        camp
    }
}

#[async_trait]
impl CampStore for MemoryCampStore {
    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    async fn get_all_camps(&self, include_talks: bool) -> DbResult<Vec<Camp>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner
            .camps
            .iter()
            .map(|c| Self::with_talks(&inner, c.clone(), include_talks))
            .collect())
    }

    async fn get_camp(&self, moniker: &str) -> DbResult<Option<Camp>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.camps.iter().find(|c| c.moniker == moniker).cloned())
    }

    async fn get_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> DbResult<Vec<Camp>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner
            .camps
            .iter()
            .filter(|c| c.event_date_start == Some(date))
            .map(|c| Self::with_talks(&inner, c.clone(), include_talks))
            .collect())
    }

    async fn add_camp(&self, camp: &NewCamp) -> DbResult<i32> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.camps.iter().any(|c| c.moniker == camp.moniker) {
            return Err(DbError::duplicate("Camp", &camp.moniker));
        }

        inner.next_camp_id += 1;
        let id = inner.next_camp_id;
        inner.camps.push(camp.clone().into_camp(id));
        Ok(id)
    }

    async fn update_camp(&self, camp: &Camp) -> DbResult<u64> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match inner.camps.iter_mut().find(|c| c.moniker == camp.moniker) {
            Some(existing) => {
                existing.name = camp.name.clone();
                existing.description = camp.description.clone();
                existing.event_date_start = camp.event_date_start;
                existing.event_date_end = camp.event_date_end;
                existing.location = camp.location.clone();
                Ok(1)
            },
            None => Ok(0),
        }
    }

    async fn delete_camp(&self, moniker: &str) -> DbResult<u64> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Some(pos) = inner.camps.iter().position(|c| c.moniker == moniker) else {
            return Ok(0);
        };
        let camp_id = inner.camps[pos].id;
        inner.camps.remove(pos);
        inner.talks.retain(|t| t.camp_id != camp_id);
        Ok(1)
    }

    async fn get_talks_by_moniker(&self, moniker: &str) -> DbResult<Vec<Talk>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match inner.camps.iter().find(|c| c.moniker == moniker) {
            Some(camp) => Ok(Self::talks_for(&inner, camp.id)),
            None => Ok(Vec::new()),
        }
    }

    async fn get_talk_by_moniker(&self, moniker: &str, talk_id: i32) -> DbResult<Option<Talk>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let Some(camp) = inner.camps.iter().find(|c| c.moniker == moniker) else {
            return Ok(None);
        };
        Ok(inner
            .talks
            .iter()
            .find(|t| t.camp_id == camp.id && t.id == talk_id)
            .cloned())
    }

    async fn add_talk(&self, talk: &NewTalk) -> DbResult<i32> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let speaker = inner
            .speakers
            .iter()
            .find(|s| s.id == talk.speaker_id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Speaker", &talk.speaker_id.to_string()))?;

        inner.next_talk_id += 1;
        let id = inner.next_talk_id;
        inner.talks.push(Talk {
            id,
            camp_id: talk.camp_id,
            title: talk.title.clone(),
            abstract_text: talk.abstract_text.clone(),
            level: talk.level,
            speaker,
        });
        Ok(id)
    }

    async fn update_talk(&self, talk: &Talk) -> DbResult<u64> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match inner
            .talks
            .iter_mut()
            .find(|t| t.id == talk.id && t.camp_id == talk.camp_id)
        {
            Some(existing) => {
                existing.title = talk.title.clone();
                existing.abstract_text = talk.abstract_text.clone();
                existing.level = talk.level;
                existing.speaker = talk.speaker.clone();
                Ok(1)
            },
            None => Ok(0),
        }
    }

    async fn delete_talk(&self, camp_id: i32, talk_id: i32) -> DbResult<u64> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let before = inner.talks.len();
        inner.talks.retain(|t| !(t.camp_id == camp_id && t.id == talk_id));
        Ok((before - inner.talks.len()) as u64)
    }

    async fn get_speaker(&self, speaker_id: i32) -> DbResult<Option<Speaker>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.speakers.iter().find(|s| s.id == speaker_id).cloned())
    }
}

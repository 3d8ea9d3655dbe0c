//! Data-access gateway for camps, talks, and speakers
//!
//! Handlers never touch SQL directly; they talk to a [`CampStore`],
//! injected as shared state. The production implementation is
//! [`postgres::PgCampStore`]; [`memory::MemoryCampStore`] backs handler
//! tests and local experimentation without a database.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::db::DbResult;
use crate::models::{Camp, NewCamp, NewTalk, Speaker, Talk};

/// Shared handle to the active store implementation
pub type SharedStore = Arc<dyn CampStore>;

/// Persistence operations for camps, talks, and speakers
///
/// Lookups return `Ok(None)` for absence; write operations return the
/// number of rows affected so callers can distinguish a no-op save from
/// a successful one.
#[async_trait]
pub trait CampStore: Send + Sync {
    /// Connectivity check used by the health endpoint
    async fn ping(&self) -> DbResult<()>;

    async fn get_all_camps(&self, include_talks: bool) -> DbResult<Vec<Camp>>;

    async fn get_camp(&self, moniker: &str) -> DbResult<Option<Camp>>;

    /// Camps whose event start date matches the given date
    async fn get_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> DbResult<Vec<Camp>>;

    /// Persist a new camp, returning its assigned id
    async fn add_camp(&self, camp: &NewCamp) -> DbResult<i32>;

    /// Persist camp field changes, keyed by moniker
    async fn update_camp(&self, camp: &Camp) -> DbResult<u64>;

    async fn delete_camp(&self, moniker: &str) -> DbResult<u64>;

    /// Talks under a camp, speaker detail included
    async fn get_talks_by_moniker(&self, moniker: &str) -> DbResult<Vec<Talk>>;

    async fn get_talk_by_moniker(&self, moniker: &str, talk_id: i32) -> DbResult<Option<Talk>>;

    /// Persist a new talk, returning its assigned id
    async fn add_talk(&self, talk: &NewTalk) -> DbResult<i32>;

    /// Persist talk field changes including the speaker association
    async fn update_talk(&self, talk: &Talk) -> DbResult<u64>;

    async fn delete_talk(&self, camp_id: i32, talk_id: i32) -> DbResult<u64>;

    async fn get_speaker(&self, speaker_id: i32) -> DbResult<Option<Speaker>>;
}

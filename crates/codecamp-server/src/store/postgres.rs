//! PostgreSQL-backed store
//!
//! Runtime-checked sqlx queries against the schema in `migrations/`.
//! Row structs derive `FromRow` and convert into the storage entities;
//! unique-constraint violations on the camp moniker surface as
//! [`DbError::Duplicate`].

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::{DbError, DbResult};
use crate::models::{Camp, Location, NewCamp, NewTalk, Speaker, Talk};
use crate::store::CampStore;

/// Store implementation over a PostgreSQL pool
#[derive(Clone)]
pub struct PgCampStore {
    pool: PgPool,
}

impl PgCampStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load talks (with speakers) for the given camp ids and attach
    /// them to the camps
    async fn attach_talks(&self, camps: &mut [Camp]) -> DbResult<()> {
        if camps.is_empty() {
            return Ok(());
        }

        let camp_ids: Vec<i32> = camps.iter().map(|c| c.id).collect();
        let rows: Vec<TalkRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.camp_id, t.title, t.abstract, t.level,
                   s.id AS speaker_id, s.first_name, s.last_name, s.company, s.bio
            FROM talks t
            JOIN speakers s ON s.id = t.speaker_id
            WHERE t.camp_id = ANY($1)
            ORDER BY t.id
            "#,
        )
        .bind(&camp_ids)
        .fetch_all(&self.pool)
        .await?;

        for camp in camps.iter_mut() {
            camp.talks = Some(Vec::new());
        }
        for row in rows {
            let talk = row.into_talk();
            if let Some(camp) = camps.iter_mut().find(|c| c.id == talk.camp_id) {
                if let Some(talks) = camp.talks.as_mut() {
                    talks.push(talk);
                }
            }
        }

        Ok(())
    }
}

const CAMP_COLUMNS: &str = "id, moniker, name, description, event_date_start, event_date_end, \
     venue_name, address1, address2, address3, city_town, state_province, postal_code, country";

#[async_trait]
impl CampStore for PgCampStore {
    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn get_all_camps(&self, include_talks: bool) -> DbResult<Vec<Camp>> {
        let rows: Vec<CampRow> = sqlx::query_as(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps ORDER BY event_date_start NULLS LAST, moniker"
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut camps: Vec<Camp> = rows.into_iter().map(CampRow::into_camp).collect();
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }

        Ok(camps)
    }

    async fn get_camp(&self, moniker: &str) -> DbResult<Option<Camp>> {
        let row: Option<CampRow> =
            sqlx::query_as(&format!("SELECT {CAMP_COLUMNS} FROM camps WHERE moniker = $1"))
                .bind(moniker)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(CampRow::into_camp))
    }

    async fn get_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> DbResult<Vec<Camp>> {
        let rows: Vec<CampRow> = sqlx::query_as(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps WHERE event_date_start = $1 ORDER BY moniker"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        let mut camps: Vec<Camp> = rows.into_iter().map(CampRow::into_camp).collect();
        if include_talks {
            self.attach_talks(&mut camps).await?;
        }

        Ok(camps)
    }

    async fn add_camp(&self, camp: &NewCamp) -> DbResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO camps (moniker, name, description, event_date_start, event_date_end,
                               venue_name, address1, address2, address3, city_town,
                               state_province, postal_code, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&camp.moniker)
        .bind(&camp.name)
        .bind(&camp.description)
        .bind(camp.event_date_start)
        .bind(camp.event_date_end)
        .bind(&camp.location.venue_name)
        .bind(&camp.location.address1)
        .bind(&camp.location.address2)
        .bind(&camp.location.address3)
        .bind(&camp.location.city_town)
        .bind(&camp.location.state_province)
        .bind(&camp.location.postal_code)
        .bind(&camp.location.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return DbError::duplicate("Camp", &camp.moniker);
                }
            }
            DbError::Sqlx(e)
        })?;

        Ok(id)
    }

    async fn update_camp(&self, camp: &Camp) -> DbResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE camps
            SET name = $1, description = $2, event_date_start = $3, event_date_end = $4,
                venue_name = $5, address1 = $6, address2 = $7, address3 = $8,
                city_town = $9, state_province = $10, postal_code = $11, country = $12,
                updated_at = now()
            WHERE moniker = $13
            "#,
        )
        .bind(&camp.name)
        .bind(&camp.description)
        .bind(camp.event_date_start)
        .bind(camp.event_date_end)
        .bind(&camp.location.venue_name)
        .bind(&camp.location.address1)
        .bind(&camp.location.address2)
        .bind(&camp.location.address3)
        .bind(&camp.location.city_town)
        .bind(&camp.location.state_province)
        .bind(&camp.location.postal_code)
        .bind(&camp.location.country)
        .bind(&camp.moniker)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_camp(&self, moniker: &str) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM camps WHERE moniker = $1")
            .bind(moniker)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn get_talks_by_moniker(&self, moniker: &str) -> DbResult<Vec<Talk>> {
        let rows: Vec<TalkRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.camp_id, t.title, t.abstract, t.level,
                   s.id AS speaker_id, s.first_name, s.last_name, s.company, s.bio
            FROM talks t
            JOIN camps c ON c.id = t.camp_id
            JOIN speakers s ON s.id = t.speaker_id
            WHERE c.moniker = $1
            ORDER BY t.id
            "#,
        )
        .bind(moniker)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TalkRow::into_talk).collect())
    }

    async fn get_talk_by_moniker(&self, moniker: &str, talk_id: i32) -> DbResult<Option<Talk>> {
        let row: Option<TalkRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.camp_id, t.title, t.abstract, t.level,
                   s.id AS speaker_id, s.first_name, s.last_name, s.company, s.bio
            FROM talks t
            JOIN camps c ON c.id = t.camp_id
            JOIN speakers s ON s.id = t.speaker_id
            WHERE c.moniker = $1 AND t.id = $2
            "#,
        )
        .bind(moniker)
        .bind(talk_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TalkRow::into_talk))
    }

    async fn add_talk(&self, talk: &NewTalk) -> DbResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO talks (camp_id, speaker_id, title, abstract, level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(talk.camp_id)
        .bind(talk.speaker_id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_talk(&self, talk: &Talk) -> DbResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE talks
            SET title = $1, abstract = $2, level = $3, speaker_id = $4
            WHERE id = $5 AND camp_id = $6
            "#,
        )
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .bind(talk.speaker.id)
        .bind(talk.id)
        .bind(talk.camp_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_talk(&self, camp_id: i32, talk_id: i32) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM talks WHERE id = $1 AND camp_id = $2")
            .bind(talk_id)
            .bind(camp_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn get_speaker(&self, speaker_id: i32) -> DbResult<Option<Speaker>> {
        let row: Option<SpeakerRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, company, bio FROM speakers WHERE id = $1",
        )
        .bind(speaker_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SpeakerRow::into_speaker))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CampRow {
    id: i32,
    moniker: String,
    name: String,
    description: Option<String>,
    event_date_start: Option<NaiveDate>,
    event_date_end: Option<NaiveDate>,
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl CampRow {
    fn into_camp(self) -> Camp {
        Camp {
            id: self.id,
            moniker: self.moniker,
            name: self.name,
            description: self.description,
            event_date_start: self.event_date_start,
            event_date_end: self.event_date_end,
            location: Location {
                venue_name: self.venue_name,
                address1: self.address1,
                address2: self.address2,
                address3: self.address3,
                city_town: self.city_town,
                state_province: self.state_province,
                postal_code: self.postal_code,
                country: self.country,
            },
            talks: None,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TalkRow {
    id: i32,
    camp_id: i32,
    title: String,
    #[sqlx(rename = "abstract")]
    abstract_text: Option<String>,
    level: Option<i32>,
    speaker_id: i32,
    first_name: String,
    last_name: String,
    company: Option<String>,
    bio: Option<String>,
}

impl TalkRow {
    fn into_talk(self) -> Talk {
        Talk {
            id: self.id,
            camp_id: self.camp_id,
            title: self.title,
            abstract_text: self.abstract_text,
            level: self.level,
            speaker: Speaker {
                id: self.speaker_id,
                first_name: self.first_name,
                last_name: self.last_name,
                company: self.company,
                bio: self.bio,
            },
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SpeakerRow {
    id: i32,
    first_name: String,
    last_name: String,
    company: Option<String>,
    bio: Option<String>,
}

impl SpeakerRow {
    fn into_speaker(self) -> Speaker {
        Speaker {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            bio: self.bio,
        }
    }
}

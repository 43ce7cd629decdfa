//! PostgreSQL Repository Implementations

use auth::Email;
use chrono::{DateTime, Utc};
use kernel::id::{EventId, ParticipantId, RegistrationId};
use sqlx::PgPool;

use crate::domain::entity::event::{Event, EventChanges, NewEvent};
use crate::domain::entity::participant::{NewParticipant, Participant, ParticipantChanges};
use crate::domain::entity::registration::{
    Embed, NewRegistration, Registration, RegistrationChanges, RegistrationDetails,
};
use crate::domain::repository::{EventRepository, ParticipantRepository, RegistrationRepository};
use crate::error::RegistryResult;

/// PostgreSQL-backed registry repository
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str = "id, name, description, date, location, capacity";

const PARTICIPANT_COLUMNS: &str = "id, name, email, phone_number";

const REGISTRATION_COLUMNS: &str = "id, event_id, participant_id, registration_date";

const REGISTRATION_DETAILS_SELECT: &str = r#"
    SELECT
        r.id,
        r.event_id,
        r.participant_id,
        r.registration_date,
        e.name AS event_name,
        e.description AS event_description,
        e.date AS event_date,
        e.location AS event_location,
        e.capacity AS event_capacity,
        p.name AS participant_name,
        p.email AS participant_email,
        p.phone_number AS participant_phone_number
    FROM registrations r
    JOIN events e ON e.id = r.event_id
    JOIN participants p ON p.id = r.participant_id
"#;

// ============================================================================
// Event Repository Implementation
// ============================================================================

impl EventRepository for PgRegistryRepository {
    async fn list_events(&self) -> RegistryResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_event(&self, id: EventId) -> RegistryResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Event::from))
    }

    async fn list_events_from(&self, now: DateTime<Utc>) -> RegistryResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE date >= $1 ORDER BY date, id"
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn create_event(&self, event: NewEvent) -> RegistryResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            INSERT INTO events (name, description, date, location, capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(event.name)
        .bind(event.description)
        .bind(event.date)
        .bind(event.location)
        .bind(event.capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_event(&self, id: EventId, changes: EventChanges) -> RegistryResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            UPDATE events SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                location = COALESCE($5, location),
                capacity = COALESCE($6, capacity)
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.date)
        .bind(changes.location)
        .bind(changes.capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_event(&self, id: EventId) -> RegistryResult<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM events WHERE id = $1 RETURNING id")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Participant Repository Implementation
// ============================================================================

impl ParticipantRepository for PgRegistryRepository {
    async fn list_participants(&self) -> RegistryResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn find_participant(&self, id: ParticipantId) -> RegistryResult<Option<Participant>> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Participant::from))
    }

    async fn create_participant(&self, participant: NewParticipant) -> RegistryResult<Participant> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            r#"
            INSERT INTO participants (name, email, phone_number, password)
            VALUES ($1, $2, $3, $4)
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(participant.name)
        .bind(participant.email.as_str())
        .bind(participant.phone_number)
        .bind(participant.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_participant(
        &self,
        id: ParticipantId,
        changes: ParticipantChanges,
    ) -> RegistryResult<Participant> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            r#"
            UPDATE participants SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone_number = COALESCE($4, phone_number)
            WHERE id = $1
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(changes.name)
        .bind(changes.email.map(String::from))
        .bind(changes.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_participant(&self, id: ParticipantId) -> RegistryResult<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM participants WHERE id = $1 RETURNING id")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Registration Repository Implementation
// ============================================================================

impl RegistrationRepository for PgRegistryRepository {
    async fn list_registrations(&self) -> RegistryResult<Vec<RegistrationDetails>> {
        let rows = sqlx::query_as::<_, RegistrationDetailsRow>(&format!(
            "{REGISTRATION_DETAILS_SELECT} ORDER BY r.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_details(Embed::Both)).collect())
    }

    async fn find_registration(
        &self,
        id: RegistrationId,
    ) -> RegistryResult<Option<RegistrationDetails>> {
        let row = sqlx::query_as::<_, RegistrationDetailsRow>(&format!(
            "{REGISTRATION_DETAILS_SELECT} WHERE r.id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_details(Embed::Both)))
    }

    async fn list_registrations_for_event(
        &self,
        event_id: EventId,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        let rows = sqlx::query_as::<_, RegistrationDetailsRow>(&format!(
            "{REGISTRATION_DETAILS_SELECT} WHERE r.event_id = $1 ORDER BY r.id"
        ))
        .bind(event_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.into_details(Embed::Participant))
            .collect())
    }

    async fn list_registrations_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        let rows = sqlx::query_as::<_, RegistrationDetailsRow>(&format!(
            "{REGISTRATION_DETAILS_SELECT} WHERE r.participant_id = $1 ORDER BY r.id"
        ))
        .bind(participant_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_details(Embed::Event)).collect())
    }

    async fn list_registrations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        let rows = sqlx::query_as::<_, RegistrationDetailsRow>(&format!(
            "{REGISTRATION_DETAILS_SELECT} WHERE r.registration_date >= $1 ORDER BY r.id"
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_details(Embed::Both)).collect())
    }

    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> RegistryResult<Registration> {
        let row = sqlx::query_as::<_, RegistrationRow>(&format!(
            r#"
            INSERT INTO registrations (event_id, participant_id)
            VALUES ($1, $2)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(registration.event_id.get())
        .bind(registration.participant_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_registration(
        &self,
        id: RegistrationId,
        changes: RegistrationChanges,
    ) -> RegistryResult<Registration> {
        let row = sqlx::query_as::<_, RegistrationRow>(&format!(
            r#"
            UPDATE registrations SET
                event_id = COALESCE($2, event_id),
                participant_id = COALESCE($3, participant_id)
            WHERE id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(changes.event_id.map(|id| id.get()))
        .bind(changes.participant_id.map(|id| id.get()))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_registration(&self, id: RegistrationId) -> RegistryResult<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM registrations WHERE id = $1 RETURNING id")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct EventRow {
    id: i32,
    name: String,
    description: Option<String>,
    date: DateTime<Utc>,
    location: String,
    capacity: i32,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: EventId::new(row.id),
            name: row.name,
            description: row.description,
            date: row.date,
            location: row.location,
            capacity: row.capacity,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: i32,
    name: String,
    email: String,
    phone_number: Option<String>,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant {
            id: ParticipantId::new(row.id),
            name: row.name,
            email: Email::from_db(row.email),
            phone_number: row.phone_number,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RegistrationRow {
    id: i32,
    event_id: i32,
    participant_id: i32,
    registration_date: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(row: RegistrationRow) -> Self {
        Registration {
            id: RegistrationId::new(row.id),
            event_id: EventId::new(row.event_id),
            participant_id: ParticipantId::new(row.participant_id),
            registration_date: row.registration_date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RegistrationDetailsRow {
    id: i32,
    event_id: i32,
    participant_id: i32,
    registration_date: DateTime<Utc>,
    event_name: String,
    event_description: Option<String>,
    event_date: DateTime<Utc>,
    event_location: String,
    event_capacity: i32,
    participant_name: String,
    participant_email: String,
    participant_phone_number: Option<String>,
}

impl RegistrationDetailsRow {
    fn into_details(self, embed: Embed) -> RegistrationDetails {
        let event = embed.event().then(|| Event {
            id: EventId::new(self.event_id),
            name: self.event_name,
            description: self.event_description,
            date: self.event_date,
            location: self.event_location,
            capacity: self.event_capacity,
        });

        let participant = embed.participant().then(|| Participant {
            id: ParticipantId::new(self.participant_id),
            name: self.participant_name,
            email: Email::from_db(self.participant_email),
            phone_number: self.participant_phone_number,
        });

        RegistrationDetails {
            registration: Registration {
                id: RegistrationId::new(self.id),
                event_id: EventId::new(self.event_id),
                participant_id: ParticipantId::new(self.participant_id),
                registration_date: self.registration_date,
            },
            event,
            participant,
        }
    }
}

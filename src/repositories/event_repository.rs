use std::collections::HashMap;

use crate::models::event::{Event, EventWithDetails, NewEvent};
use crate::models::rsvp::Rsvp;
use crate::models::user::{Role, UserPublic};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::{RepositoryError, RepositoryResult};

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, new_event: NewEvent) -> RepositoryResult<Event>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Event>>;
    /// All events, newest first, each with its RSVP list and organizer
    /// projection. The password digest is never selected.
    async fn list_with_details(&self) -> RepositoryResult<Vec<EventWithDetails>>;
    /// One-way approval. Idempotent for already-approved events.
    async fn set_approved(&self, id: i64) -> RepositoryResult<Event>;
    async fn delete_event(&self, id: i64) -> RepositoryResult<()>;
}

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str =
    "id, title, description, date, location, organizer_id, approved, created_at";

/// Row shape for the listing join. Kept private to the repository.
#[derive(FromRow)]
struct EventListRow {
    id: i64,
    title: String,
    description: String,
    date: DateTime<Utc>,
    location: String,
    organizer_id: i64,
    approved: bool,
    created_at: DateTime<Utc>,
    organizer_email: String,
    organizer_role: Role,
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create_event(&self, new_event: NewEvent) -> RepositoryResult<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (title, description, date, location, organizer_id, approved) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.date)
        .bind(&new_event.location)
        .bind(new_event.organizer_id)
        .bind(new_event.approved)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_with_details(&self) -> RepositoryResult<Vec<EventWithDetails>> {
        let rows = sqlx::query_as::<_, EventListRow>(
            "SELECT e.id, e.title, e.description, e.date, e.location, \
                    e.organizer_id, e.approved, e.created_at, \
                    u.email AS organizer_email, u.role AS organizer_role \
             FROM events e \
             JOIN users u ON u.id = e.organizer_id \
             ORDER BY e.created_at DESC, e.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let rsvps = sqlx::query_as::<_, Rsvp>(
            "SELECT id, user_id, event_id, status, created_at FROM rsvps ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_event: HashMap<i64, Vec<Rsvp>> = HashMap::new();
        for rsvp in rsvps {
            by_event.entry(rsvp.event_id).or_default().push(rsvp);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let rsvps = by_event.remove(&row.id).unwrap_or_default();
                EventWithDetails {
                    event: Event {
                        id: row.id,
                        title: row.title,
                        description: row.description,
                        date: row.date,
                        location: row.location,
                        organizer_id: row.organizer_id,
                        approved: row.approved,
                        created_at: row.created_at,
                    },
                    rsvps,
                    organizer: UserPublic {
                        id: row.organizer_id,
                        email: row.organizer_email,
                        role: row.organizer_role,
                    },
                }
            })
            .collect())
    }

    async fn set_approved(&self, id: i64) -> RepositoryResult<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET approved = 1 WHERE id = ? RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        event.ok_or(RepositoryError::NotFound)
    }

    async fn delete_event(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers;

    fn sample_event(organizer_id: i64, title: &str, approved: bool) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "a gathering".to_string(),
            date: Utc::now(),
            location: "Room 12".to_string(),
            organizer_id,
            approved,
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let organizer =
            test_helpers::insert_test_user(&pool, "org@example.com", "pw", Role::Organizer)
                .await
                .unwrap();
        let repo = SqliteEventRepository::new(pool);

        let event = repo
            .create_event(sample_event(organizer, "Meetup", false))
            .await
            .unwrap();
        assert!(!event.approved);

        let found = repo.find_by_id(event.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Meetup");
        assert_eq!(found.organizer_id, organizer);
    }

    #[tokio::test]
    async fn listing_is_newest_first_with_organizer_projection() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let organizer =
            test_helpers::insert_test_user(&pool, "org@example.com", "pw", Role::Organizer)
                .await
                .unwrap();
        let repo = SqliteEventRepository::new(pool);

        let first = repo
            .create_event(sample_event(organizer, "First", false))
            .await
            .unwrap();
        let second = repo
            .create_event(sample_event(organizer, "Second", true))
            .await
            .unwrap();

        let listed = repo.list_with_details().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].event.id, second.id);
        assert_eq!(listed[1].event.id, first.id);
        assert_eq!(listed[0].organizer.email, "org@example.com");
        assert_eq!(listed[0].organizer.role, Role::Organizer);
    }

    #[tokio::test]
    async fn approval_is_idempotent() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let organizer =
            test_helpers::insert_test_user(&pool, "org@example.com", "pw", Role::Organizer)
                .await
                .unwrap();
        let repo = SqliteEventRepository::new(pool);

        let event = repo
            .create_event(sample_event(organizer, "Meetup", false))
            .await
            .unwrap();

        let approved = repo.set_approved(event.id).await.unwrap();
        assert!(approved.approved);
        let again = repo.set_approved(event.id).await.unwrap();
        assert!(again.approved);
    }

    #[tokio::test]
    async fn approving_missing_event_is_not_found() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let repo = SqliteEventRepository::new(pool);

        let err = repo.set_approved(4242).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn deleting_missing_event_is_not_found() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let repo = SqliteEventRepository::new(pool);

        let err = repo.delete_event(4242).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_cascades_to_rsvps() {
        let pool = test_helpers::create_test_db().await.unwrap();
        let organizer =
            test_helpers::insert_test_user(&pool, "org@example.com", "pw", Role::Organizer)
                .await
                .unwrap();
        let attendee =
            test_helpers::insert_test_user(&pool, "att@example.com", "pw", Role::Attendee)
                .await
                .unwrap();
        let repo = SqliteEventRepository::new(pool.clone());

        let event = repo
            .create_event(sample_event(organizer, "Meetup", true))
            .await
            .unwrap();
        sqlx::query("INSERT INTO rsvps (user_id, event_id, status) VALUES (?, ?, 'GOING')")
            .bind(attendee)
            .bind(event.id)
            .execute(&pool)
            .await
            .unwrap();

        repo.delete_event(event.id).await.unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rsvps")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}

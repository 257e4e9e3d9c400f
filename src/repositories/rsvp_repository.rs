use crate::models::rsvp::Rsvp;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::RepositoryResult;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait RsvpRepository: Send + Sync {
    /// Insert-or-update keyed by (user_id, event_id). The table's uniqueness
    /// constraint is the race-breaker, so concurrent duplicate RSVPs resolve
    /// to a single row without a prior read.
    async fn upsert(&self, user_id: i64, event_id: i64, status: &str) -> RepositoryResult<Rsvp>;
}

pub struct SqliteRsvpRepository {
    pool: SqlitePool,
}

impl SqliteRsvpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepository {
    async fn upsert(&self, user_id: i64, event_id: i64, status: &str) -> RepositoryResult<Rsvp> {
        let rsvp = sqlx::query_as::<_, Rsvp>(
            "INSERT INTO rsvps (user_id, event_id, status) VALUES (?, ?, ?) \
             ON CONFLICT (user_id, event_id) DO UPDATE SET status = excluded.status \
             RETURNING id, user_id, event_id, status, created_at",
        )
        .bind(user_id)
        .bind(event_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(rsvp)
    }
}

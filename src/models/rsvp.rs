use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Status used when the caller supplies none.
pub const DEFAULT_RSVP_STATUS: &str = "GOING";

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::rsvp::Rsvp;
use super::user::UserPublic;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub organizer_id: i64,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a new event. `approved` is decided by the
/// lifecycle policy before this struct reaches the repository.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub organizer_id: i64,
    pub approved: bool,
}

/// An event enriched with its RSVP list and the organizer projection,
/// as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithDetails {
    #[serde(flatten)]
    pub event: Event,
    pub rsvps: Vec<Rsvp>,
    pub organizer: UserPublic,
}

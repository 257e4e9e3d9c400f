//! Event lifecycle policy: who may create, approve, list, and delete events,
//! and what state each action produces.

use crate::auth::AuthUser;
use crate::models::event::{Event, EventWithDetails, NewEvent};
use crate::models::user::Role;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::RepositoryError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    #[error("Only organizers can create events")]
    CreateForbidden,
    #[error("Only admins can approve events")]
    ApproveForbidden,
    #[error("You don't have permission to delete this event")]
    DeleteForbidden,
    #[error("Event not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    /// RFC 3339 timestamp, `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD`
    /// taken as midnight UTC.
    pub date: String,
    pub location: String,
}

pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// All events, newest first. Authentication is enforced upstream; no
    /// role restriction applies here.
    pub async fn list_events(&self) -> Result<Vec<EventWithDetails>, EventServiceError> {
        Ok(self.repository.list_with_details().await?)
    }

    /// ORGANIZER or ADMIN only. Events created by an ADMIN start approved;
    /// everyone else's wait for explicit approval.
    pub async fn create_event(
        &self,
        principal: &AuthUser,
        request: CreateEventRequest,
    ) -> Result<Event, EventServiceError> {
        if principal.role != Role::Organizer && principal.role != Role::Admin {
            return Err(EventServiceError::CreateForbidden);
        }

        let date = self.validate(&request)?;

        let new_event = NewEvent {
            title: request.title,
            description: request.description,
            date,
            location: request.location,
            organizer_id: principal.id,
            approved: principal.role == Role::Admin,
        };

        Ok(self.repository.create_event(new_event).await?)
    }

    /// ADMIN only. One-way false -> true; approving an already-approved
    /// event succeeds without effect. A missing id is surfaced as NotFound,
    /// never masked as success.
    pub async fn approve_event(
        &self,
        principal: &AuthUser,
        event_id: i64,
    ) -> Result<Event, EventServiceError> {
        if principal.role != Role::Admin {
            return Err(EventServiceError::ApproveForbidden);
        }

        match self.repository.set_approved(event_id).await {
            Ok(event) => Ok(event),
            Err(RepositoryError::NotFound) => Err(EventServiceError::NotFound),
            Err(e) => Err(EventServiceError::RepositoryError(e)),
        }
    }

    /// ADMIN, or the organizer who owns the event. Existence is checked
    /// before permission, so a missing id is always NotFound regardless of
    /// who asks.
    pub async fn delete_event(
        &self,
        principal: &AuthUser,
        event_id: i64,
    ) -> Result<(), EventServiceError> {
        let event = self
            .repository
            .find_by_id(event_id)
            .await?
            .ok_or(EventServiceError::NotFound)?;

        if principal.role != Role::Admin && event.organizer_id != principal.id {
            return Err(EventServiceError::DeleteForbidden);
        }

        match self.repository.delete_event(event_id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => Err(EventServiceError::NotFound),
            Err(e) => Err(EventServiceError::RepositoryError(e)),
        }
    }

    fn validate(&self, request: &CreateEventRequest) -> Result<DateTime<Utc>, EventServiceError> {
        if request.title.trim().is_empty() {
            return Err(EventServiceError::Validation("title is required".into()));
        }
        if request.description.trim().is_empty() {
            return Err(EventServiceError::Validation(
                "description is required".into(),
            ));
        }
        if request.location.trim().is_empty() {
            return Err(EventServiceError::Validation("location is required".into()));
        }
        parse_event_date(&request.date).ok_or_else(|| {
            EventServiceError::Validation(format!("invalid date: {}", request.date))
        })
    }
}

/// Accepts RFC 3339, a space-separated datetime, or a bare date at midnight
/// UTC.
fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

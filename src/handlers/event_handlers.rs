use crate::auth::AuthUser;
use crate::error::{AppJson, Result};
use crate::models::event::{Event, EventWithDetails};
use crate::models::rsvp::Rsvp;
use crate::services::event_service::CreateEventRequest;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn list_events(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Vec<EventWithDetails>>> {
    let events = state.event_service.list_events().await?;
    Ok(Json(events))
}

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

pub async fn create_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppJson(body): AppJson<CreateEventBody>,
) -> Result<Json<Event>> {
    let event = state
        .event_service
        .create_event(
            &user,
            CreateEventRequest {
                title: body.title,
                description: body.description,
                date: body.date,
                location: body.location,
            },
        )
        .await?;

    tracing::info!(event_id = event.id, organizer_id = user.id, "event created");

    Ok(Json(event))
}

pub async fn approve_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<Event>> {
    let event = state.event_service.approve_event(&user, id).await?;
    tracing::info!(event_id = event.id, "event approved");
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    state.event_service.delete_event(&user, id).await?;
    tracing::info!(event_id = id, "event deleted");
    Ok(Json(json!({ "message": "Event deleted successfully" })))
}

#[derive(Deserialize, Default)]
pub struct RsvpBody {
    pub status: Option<String>,
}

pub async fn rsvp_to_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    body: axum::body::Bytes,
) -> Result<Json<Rsvp>> {
    // The body is optional; an absent or empty one means the default status.
    let status = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<RsvpBody>(&body)
            .map_err(|e| crate::error::AppError::Validation(format!("invalid JSON body: {e}")))?
            .status
    };
    let rsvp = state.rsvp_service.rsvp(&user, id, status).await?;
    Ok(Json(rsvp))
}

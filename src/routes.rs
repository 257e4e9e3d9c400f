use crate::error::AppError;
use crate::{auth, handlers, AppState};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble the full application router. Protected routes sit behind the
/// bearer-token gate; everything else is public.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route("/events/{id}/approve", put(handlers::approve_event))
        .route("/events/{id}", delete(handlers::delete_event))
        .route("/events/{id}/rsvp", post(handlers::rsvp_to_event))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .merge(protected)
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

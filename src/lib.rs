pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_service: Arc<services::auth_service::AuthService>,
    pub event_service: Arc<services::event_service::EventService>,
    pub rsvp_service: Arc<services::rsvp_service::RsvpService>,
    pub token_service: Arc<services::token_service::TokenService>,
    pub pool: sqlx::SqlitePool,
}

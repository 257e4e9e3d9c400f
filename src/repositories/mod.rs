pub mod event_repository;
pub mod rsvp_repository;
pub mod user_repository;

pub use event_repository::{EventRepository, SqliteEventRepository};
pub use rsvp_repository::{RsvpRepository, SqliteRsvpRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

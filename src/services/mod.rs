pub mod auth_service;
pub mod event_service;
pub mod rsvp_service;
pub mod token_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceError, LoginRequest};
pub use event_service::{CreateEventRequest, EventService, EventServiceError};
pub use rsvp_service::{RsvpService, RsvpServiceError};
pub use token_service::{Claims, TokenService, TokenServiceError};
pub use user_service::{SignupRequest, UserService, UserServiceError};

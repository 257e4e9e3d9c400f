pub mod auth_handlers;
pub mod event_handlers;

pub use auth_handlers::{login, signup};
pub use event_handlers::{approve_event, create_event, delete_event, list_events, rsvp_to_event};

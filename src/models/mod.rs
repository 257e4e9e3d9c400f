pub mod event;
pub mod rsvp;
pub mod user;

pub use event::{Event, EventWithDetails, NewEvent};
pub use rsvp::{Rsvp, DEFAULT_RSVP_STATUS};
pub use user::{Role, User, UserPublic};

//! RSVP policy: attendees only, upsert-by-(user, event) semantics.

use crate::auth::AuthUser;
use crate::models::rsvp::{Rsvp, DEFAULT_RSVP_STATUS};
use crate::models::user::Role;
use crate::repositories::rsvp_repository::RsvpRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum RsvpServiceError {
    #[error("Only attendees can RSVP")]
    Forbidden,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct RsvpService {
    repository: Arc<dyn RsvpRepository>,
}

impl RsvpService {
    pub fn new(repository: Arc<dyn RsvpRepository>) -> Self {
        Self { repository }
    }

    /// Upsert the caller's RSVP for an event. The status string is accepted
    /// as-is; absent or blank input falls back to "GOING".
    pub async fn rsvp(
        &self,
        principal: &AuthUser,
        event_id: i64,
        status: Option<String>,
    ) -> Result<Rsvp, RsvpServiceError> {
        if principal.role != Role::Attendee {
            return Err(RsvpServiceError::Forbidden);
        }

        let status = status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RSVP_STATUS.to_string());

        Ok(self.repository.upsert(principal.id, event_id, &status).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::rsvp_repository::MockRsvpRepository;

    fn principal(role: Role) -> AuthUser {
        AuthUser {
            id: 42,
            email: "who@example.com".to_string(),
            role,
        }
    }

    fn stored_rsvp(user_id: i64, event_id: i64, status: &str) -> Rsvp {
        Rsvp {
            id: 1,
            user_id,
            event_id,
            status: status.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn organizers_and_admins_cannot_rsvp() {
        for role in [Role::Organizer, Role::Admin] {
            let service = RsvpService::new(Arc::new(MockRsvpRepository::new()));
            let result = service.rsvp(&principal(role), 1, None).await;
            assert!(matches!(result, Err(RsvpServiceError::Forbidden)));
        }
    }

    #[tokio::test]
    async fn missing_status_defaults_to_going() {
        let mut mock_repo = MockRsvpRepository::new();

        mock_repo
            .expect_upsert()
            .withf(|user_id, event_id, status| {
                *user_id == 42 && *event_id == 7 && status == "GOING"
            })
            .times(1)
            .returning(|user_id, event_id, status| {
                let rsvp = stored_rsvp(user_id, event_id, status);
                Box::pin(async move { Ok(rsvp) })
            });

        let service = RsvpService::new(Arc::new(mock_repo));
        let rsvp = service
            .rsvp(&principal(Role::Attendee), 7, None)
            .await
            .unwrap();
        assert_eq!(rsvp.status, "GOING");
    }

    #[tokio::test]
    async fn blank_status_defaults_to_going() {
        let mut mock_repo = MockRsvpRepository::new();

        mock_repo
            .expect_upsert()
            .withf(|_, _, status| status == "GOING")
            .times(1)
            .returning(|user_id, event_id, status| {
                let rsvp = stored_rsvp(user_id, event_id, status);
                Box::pin(async move { Ok(rsvp) })
            });

        let service = RsvpService::new(Arc::new(mock_repo));
        service
            .rsvp(&principal(Role::Attendee), 7, Some("   ".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn supplied_status_is_passed_through() {
        let mut mock_repo = MockRsvpRepository::new();

        mock_repo
            .expect_upsert()
            .withf(|_, _, status| status == "MAYBE")
            .times(1)
            .returning(|user_id, event_id, status| {
                let rsvp = stored_rsvp(user_id, event_id, status);
                Box::pin(async move { Ok(rsvp) })
            });

        let service = RsvpService::new(Arc::new(mock_repo));
        let rsvp = service
            .rsvp(&principal(Role::Attendee), 7, Some("MAYBE".to_string()))
            .await
            .unwrap();
        assert_eq!(rsvp.status, "MAYBE");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role of an account. Stored as TEXT (`ATTENDEE`, `ORGANIZER`, `ADMIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Attendee,
    Organizer,
    Admin,
}

impl Role {
    /// Parse a role from its wire representation. Unknown strings are
    /// rejected rather than stored verbatim.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ATTENDEE" => Some(Role::Attendee),
            "ORGANIZER" => Some(Role::Organizer),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Attendee => "ATTENDEE",
            Role::Organizer => "ORGANIZER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    // The digest never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Projection of a user safe to embed in API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_roles_only() {
        assert_eq!(Role::parse("ATTENDEE"), Some(Role::Attendee));
        assert_eq!(Role::parse("ORGANIZER"), Some(Role::Organizer));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("SUPERUSER"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Role::Organizer).unwrap(),
            "\"ORGANIZER\""
        );
    }

    #[test]
    fn user_serialization_never_includes_password_hash() {
        let user = User {
            id: 1,
            email: "a@b.c".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Attendee,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }
}

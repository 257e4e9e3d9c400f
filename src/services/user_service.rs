use crate::models::user::{Role, User};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password too weak (minimum 6 characters)")]
    WeakPassword,
    #[error("Unknown role: {0}")]
    InvalidRole(String),
    #[error("Email already registered")]
    EmailTaken,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct SignupRequest {
    pub email: String,
    pub password: String,
    /// Optional wire role; defaults to ATTENDEE, unknown values rejected.
    pub role: Option<String>,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<User, UserServiceError> {
        self.validate_email(&request.email)?;
        self.validate_password(&request.password)?;

        let role = match request.role.as_deref().filter(|r| !r.is_empty()) {
            None => Role::Attendee,
            Some(raw) => {
                Role::parse(raw).ok_or_else(|| UserServiceError::InvalidRole(raw.to_string()))?
            }
        };

        let password_hash = self.hash_password(&request.password)?;

        match self
            .repository
            .create_user(&request.email, &password_hash, role)
            .await
        {
            Ok(user) => Ok(user),
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::EmailTaken),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }

    fn validate_email(&self, email: &str) -> Result<(), UserServiceError> {
        if !email.contains('@') || email.len() > 255 || email.is_empty() {
            return Err(UserServiceError::InvalidEmail);
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), UserServiceError> {
        if password.len() < 6 {
            return Err(UserServiceError::WeakPassword);
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> Result<String, UserServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserServiceError::HashingError(e.to_string()))
    }
}

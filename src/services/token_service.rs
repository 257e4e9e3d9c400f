//! HS256 bearer-token issuance and verification.
//!
//! Claims carry the authenticated identity (id, email, role) plus issue and
//! expiry timestamps. Tokens are stateless: nothing is stored server-side,
//! every request re-verifies the signature and expiry.

use crate::config::JwtConfig;
use crate::models::user::{Role, User};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TokenServiceError {
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    /// Bad signature, malformed payload, or expired.
    #[error("Invalid token")]
    Invalid,
}

/// Identity claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the user's database id.
    pub sub: i64,
    pub email: String,
    pub role: Role,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration (UTC Unix timestamp).
    pub exp: i64,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_mins: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            expiry_mins: config.expiry_mins,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenServiceError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + self.expiry_mins * 60,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenServiceError::Signing)
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenServiceError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| TokenServiceError::Invalid)
    }
}

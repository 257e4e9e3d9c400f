use std::env;

use anyhow::Context;

/// Listen address, from `HOST` / `PORT` (defaults 127.0.0.1:3000).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self { host, port })
    }
}

/// Signing configuration for issued bearer tokens.
///
/// | Env Var           | Required | Default |
/// |-------------------|----------|---------|
/// | `JWT_SECRET`      | **yes**  | --      |
/// | `JWT_EXPIRY_MINS` | no       | `1440`  |
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_mins: i64,
}

const DEFAULT_EXPIRY_MINS: i64 = 1440;

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        anyhow::ensure!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins = env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse::<i64>()
            .context("JWT_EXPIRY_MINS must be a valid i64")?;

        Ok(Self {
            secret,
            expiry_mins,
        })
    }
}

pub mod test_helpers {
    use crate::models::user::Role;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a test user with a hashed password, returning its id
    pub async fn insert_test_user(
        pool: &SqlitePool,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<i64, sqlx::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                sqlx::Error::Configuration(format!("Password hashing failed: {}", e).into())
            })?
            .to_string();

        let result = sqlx::query("INSERT INTO users (email, password_hash, role) VALUES (?, ?, ?)")
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a test event, returning its id
    pub async fn insert_test_event(
        pool: &SqlitePool,
        organizer_id: i64,
        title: &str,
        approved: bool,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO events (title, description, date, location, organizer_id, approved) \
             VALUES (?, 'test event', ?, 'Test Hall', ?, ?)",
        )
        .bind(title)
        .bind(chrono::Utc::now())
        .bind(organizer_id)
        .bind(approved)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

//! Credential store: accounts keyed by a unique username

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

use crate::{
    error::{AuthError, AuthResult},
    models::{User, UserId},
    password,
};

/// Credential store backed by the `user` table
#[derive(Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
}

impl CredentialStore {
    /// Create a new credential store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account, hashing the password before it is stored
    ///
    /// Usernames are compared exactly (case-sensitive). Length rules are the
    /// caller's responsibility, see [`crate::validation`].
    pub async fn register(&self, username: &str, raw_password: &str) -> AuthResult<UserId> {
        info!("Registering user: {}", username);

        if self.find_by_username(username).await?.is_some() {
            warn!("Registration rejected, username taken: {}", username);
            return Err(AuthError::DuplicateUsername(username.to_string()));
        }

        let password_hash = password::hash_password(raw_password)?;

        let result = sqlx::query(
            r#"
            INSERT INTO "user" (username, password_hash, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Lost a race against a concurrent registration
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AuthError::DuplicateUsername(username.to_string())
            }
            other => AuthError::Database(other),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Verify a username/password pair and return the account id
    ///
    /// An unknown username still pays for one Argon2 verification.
    pub async fn verify(&self, username: &str, raw_password: &str) -> AuthResult<UserId> {
        info!("Verifying credentials for user: {}", username);

        let Some(user) = self.find_by_username(username).await? else {
            password::verify_dummy(raw_password);
            warn!("Login failed, unknown user: {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        if password::verify_password(raw_password, &user.password_hash)? {
            Ok(user.id)
        } else {
            warn!("Login failed, wrong password for user: {}", username);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Find a user by exact username
    pub async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM "user"
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: UserId) -> AuthResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM "user"
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

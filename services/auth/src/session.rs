//! Session management backed by the `session` table
//!
//! A session is an opaque random token handed to the client. Only its SHA-256
//! digest is persisted, so a leaked database does not leak live sessions.

use chrono::{Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{
    error::{AuthError, AuthResult},
    models::{Session, SessionRecord, User, UserId},
    repositories::CredentialStore,
};

/// Upper bound on a session lifetime (ten years)
const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Session manager mapping tokens to user identities
#[derive(Clone)]
pub struct SessionManager {
    pool: SqlitePool,
    credentials: CredentialStore,
    ttl: Duration,
}

impl SessionManager {
    /// Create a new session manager issuing sessions valid for `ttl_seconds`
    ///
    /// Session owners are resolved through `credentials`.
    pub fn new(pool: SqlitePool, credentials: CredentialStore, ttl_seconds: u64) -> Self {
        let ttl = Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64);
        Self {
            pool,
            credentials,
            ttl,
        }
    }

    /// Create a new session for a user
    pub async fn login(&self, user_id: UserId) -> AuthResult<Session> {
        info!("Creating session for user: {}", user_id);

        let token = generate_token();
        let now = Utc::now();
        let expires_at = now + self.ttl;

        sqlx::query(
            r#"
            INSERT INTO session (token_hash, user_id, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(hash_token(&token))
        .bind(user_id)
        .bind(expires_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Session {
            token,
            user_id,
            expires_at,
        })
    }

    /// Resolve the user behind a session token
    ///
    /// Unknown and expired tokens are both `Unauthenticated`; an expired
    /// session is removed on sight.
    pub async fn current_user(&self, token: &str) -> AuthResult<User> {
        let token_hash = hash_token(token);

        let record = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT token_hash, user_id, expires_at, created_at
            FROM session
            WHERE token_hash = ?
            "#,
        )
        .bind(&token_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::Unauthenticated)?;

        if record.is_expired_at(Utc::now()) {
            info!("Session expired for user: {}", record.user_id);
            self.delete_by_hash(&token_hash).await?;
            return Err(AuthError::Unauthenticated);
        }

        let user = self.credentials.find_by_id(record.user_id).await?;

        user.ok_or_else(|| {
            warn!("Session points at missing user: {}", record.user_id);
            AuthError::Unauthenticated
        })
    }

    /// End a session; unknown tokens are ignored
    pub async fn logout(&self, token: &str) -> AuthResult<()> {
        let removed = self.delete_by_hash(&hash_token(token)).await?;
        info!("Session logout, removed: {}", removed);
        Ok(())
    }

    /// Delete every session whose expiry has passed
    pub async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let result = sqlx::query("DELETE FROM session WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        info!("Cleaned up {} expired sessions", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<bool> {
        let result = sqlx::query("DELETE FROM session WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// 256 random bits, hex encoded
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

//! Application state shared across handlers

use std::sync::Arc;

use auth::{CredentialStore, RateLimiter, RateLimiterConfig, SessionManager};
use sqlx::SqlitePool;

use crate::{
    config::ServerConfig,
    repositories::{GoalTracker, ProjectRegistry, TaskList},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Arc<ServerConfig>,
    pub credentials: CredentialStore,
    pub sessions: SessionManager,
    pub rate_limiter: RateLimiter,
    pub projects: ProjectRegistry,
    pub goals: GoalTracker,
    pub tasks: TaskList,
}

impl AppState {
    /// Wire every component to one store
    pub fn new(db_pool: SqlitePool, config: ServerConfig) -> Self {
        let projects = ProjectRegistry::new(db_pool.clone());
        let credentials = CredentialStore::new(db_pool.clone());

        Self {
            sessions: SessionManager::new(
                db_pool.clone(),
                credentials.clone(),
                config.session_ttl_seconds,
            ),
            credentials,
            rate_limiter: RateLimiter::new(RateLimiterConfig::default()),
            goals: GoalTracker::new(db_pool.clone(), projects.clone()),
            tasks: TaskList::new(db_pool.clone()),
            projects,
            config: Arc::new(config),
            db_pool,
        }
    }
}

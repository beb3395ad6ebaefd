//! `PostgreSQL` implementation of the `SessionRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use eveboard_core::error::DomainError;
use eveboard_core::records::UserRecord;
use eveboard_core::repository::SessionRepository;

use crate::infra;

/// PostgreSQL-backed session store.
#[derive(Debug, Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Creates a new `PgSessionRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn user_for_token(&self, token: &str) -> Result<Option<UserRecord>, DomainError> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r"
            SELECT u.id, u.username
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1
              AND s.expires_at > NOW()
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?;

        Ok(row.map(|(id, username)| UserRecord { id, username }))
    }
}

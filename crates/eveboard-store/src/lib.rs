//! PostgreSQL implementations of the eveboard repository traits.
//!
//! Schema lives in the workspace `migrations/` directory.

pub mod pg_asset_repository;
pub mod pg_character_repository;
pub mod pg_session_repository;

pub use pg_asset_repository::PgAssetRepository;
pub use pg_character_repository::PgCharacterRepository;
pub use pg_session_repository::PgSessionRepository;

use eveboard_core::error::DomainError;

pub(crate) fn infra(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

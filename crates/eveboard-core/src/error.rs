//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No character with this ID is visible to the caller.
    #[error("character not found: {0}")]
    CharacterNotFound(i64),

    /// No asset with this ID exists.
    #[error("asset not found: {0}")]
    AssetNotFound(i64),

    /// The caller does not own the named character or asset.
    #[error("You don't own {name}")]
    NotOwner {
        /// Display name of the character or ship.
        name: String,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

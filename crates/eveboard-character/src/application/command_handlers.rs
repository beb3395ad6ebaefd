//! Command handlers for the Character & Skills context.

use eveboard_core::error::DomainError;
use eveboard_core::repository::CharacterRepository;
use serde::Serialize;

/// Result of a successful token disconnect.
#[derive(Debug, Serialize)]
pub struct DisconnectOutcome {
    /// The character that was unlinked.
    pub character_id: i64,
    /// Human-readable confirmation.
    pub message: String,
}

/// Disconnects a character's SSO token.
///
/// The character is unlinked from the calling account and the token row is
/// deleted; the character row itself survives, orphaned, until the next
/// authentication re-links it.
///
/// # Errors
///
/// Returns `DomainError::CharacterNotFound` if no such character exists,
/// `DomainError::NotOwner` if it belongs to a different account (or to
/// nobody), and `DomainError::Infrastructure` if the repository fails.
pub async fn disconnect_character(
    owner_id: i64,
    character_id: i64,
    repo: &dyn CharacterRepository,
) -> Result<DisconnectOutcome, DomainError> {
    let character = repo
        .find(character_id)
        .await?
        .ok_or(DomainError::CharacterNotFound(character_id))?;

    if character.owner_id != Some(owner_id) {
        return Err(DomainError::NotOwner {
            name: character.name,
        });
    }

    repo.disconnect_token(character_id).await?;
    tracing::info!(character_id, owner_id, "disconnected auth token");

    Ok(DisconnectOutcome {
        character_id,
        message: format!("Disconnected auth token for {}", character.name),
    })
}

//! Repository abstractions over the character portal's relational store.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::records::{
    CharacterRecord, CloneRecord, ImplantRecord, ShipRecord, SkillRecord, UserRecord,
};

/// Resolves bearer session tokens to accounts.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Look up the account behind a session token. Expired sessions do not
    /// resolve.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn user_for_token(&self, token: &str) -> Result<Option<UserRecord>, DomainError>;
}

/// Access to characters, their skills, implants, and jump clones.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// All characters linked to an account, each carrying its aggregated
    /// skillpoint total. Order is unspecified; callers sort.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<CharacterRecord>, DomainError>;

    /// A single character by ID, regardless of ownership. Callers enforce
    /// ownership.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn find(&self, character_id: i64) -> Result<Option<CharacterRecord>, DomainError>;

    /// Every trained skill of a character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn skills_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<SkillRecord>, DomainError>;

    /// Implants currently plugged into a character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn implants_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<ImplantRecord>, DomainError>;

    /// Jump clones of a character, implants included.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn clones_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<CloneRecord>, DomainError>;

    /// Unlink a character from its account and delete the backing SSO token
    /// row, atomically. The character row itself survives, orphaned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn disconnect_token(&self, character_id: i64) -> Result<(), DomainError>;
}

/// Access to ship assets.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Assembled ship-category assets in a known solar system, across every
    /// character linked to the account. Group-level exclusions and ordering
    /// are left to the caller.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn ships_for_owner(&self, owner_id: i64) -> Result<Vec<ShipRecord>, DomainError>;

    /// A single ship asset by ID, regardless of ownership. Callers enforce
    /// ownership.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn find_ship(&self, asset_id: i64) -> Result<Option<ShipRecord>, DomainError>;
}

//! Test repositories — in-memory implementations of the core repository
//! traits.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use eveboard_core::error::DomainError;
use eveboard_core::records::{
    CharacterRecord, CloneRecord, ImplantRecord, ShipRecord, SkillRecord, UserRecord,
};
use eveboard_core::repository::{AssetRepository, CharacterRepository, SessionRepository};

/// A session repository backed by a fixed token → account map.
#[derive(Debug, Default)]
pub struct FakeSessionRepository {
    sessions: HashMap<String, UserRecord>,
}

impl FakeSessionRepository {
    /// Create an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token that resolves to `user`.
    #[must_use]
    pub fn with_session(mut self, token: &str, user: UserRecord) -> Self {
        self.sessions.insert(token.to_owned(), user);
        self
    }
}

#[async_trait]
impl SessionRepository for FakeSessionRepository {
    async fn user_for_token(&self, token: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.sessions.get(token).cloned())
    }
}

/// A character repository backed by in-memory fixtures. Disconnect calls are
/// recorded rather than applied, so tests can assert exactly which characters
/// were wiped.
#[derive(Debug, Default)]
pub struct FakeCharacterRepository {
    characters: Vec<CharacterRecord>,
    skills: HashMap<i64, Vec<SkillRecord>>,
    implants: HashMap<i64, Vec<ImplantRecord>>,
    clones: HashMap<i64, Vec<CloneRecord>>,
    disconnected: Mutex<Vec<i64>>,
}

impl FakeCharacterRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character record.
    #[must_use]
    pub fn with_character(mut self, character: CharacterRecord) -> Self {
        self.characters.push(character);
        self
    }

    /// Attach trained skills to a character.
    #[must_use]
    pub fn with_skills(mut self, character_id: i64, skills: Vec<SkillRecord>) -> Self {
        self.skills.entry(character_id).or_default().extend(skills);
        self
    }

    /// Attach implants to a character.
    #[must_use]
    pub fn with_implants(mut self, character_id: i64, implants: Vec<ImplantRecord>) -> Self {
        self.implants
            .entry(character_id)
            .or_default()
            .extend(implants);
        self
    }

    /// Attach jump clones to a character.
    #[must_use]
    pub fn with_clones(mut self, character_id: i64, clones: Vec<CloneRecord>) -> Self {
        self.clones.entry(character_id).or_default().extend(clones);
        self
    }

    /// Character IDs that `disconnect_token` was called for, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn disconnected(&self) -> Vec<i64> {
        self.disconnected.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterRepository for FakeCharacterRepository {
    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<CharacterRecord>, DomainError> {
        Ok(self
            .characters
            .iter()
            .filter(|c| c.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn find(&self, character_id: i64) -> Result<Option<CharacterRecord>, DomainError> {
        Ok(self
            .characters
            .iter()
            .find(|c| c.id == character_id)
            .cloned())
    }

    async fn skills_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<SkillRecord>, DomainError> {
        Ok(self.skills.get(&character_id).cloned().unwrap_or_default())
    }

    async fn implants_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<ImplantRecord>, DomainError> {
        Ok(self
            .implants
            .get(&character_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn clones_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<CloneRecord>, DomainError> {
        Ok(self.clones.get(&character_id).cloned().unwrap_or_default())
    }

    async fn disconnect_token(&self, character_id: i64) -> Result<(), DomainError> {
        self.disconnected.lock().unwrap().push(character_id);
        Ok(())
    }
}

/// An asset repository backed by in-memory ship fixtures. Returns ships as-is
/// for the owning account; like the real store, it leaves group exclusions
/// and ordering to the hangar domain.
#[derive(Debug, Default)]
pub struct FakeAssetRepository {
    ships: Vec<ShipRecord>,
}

impl FakeAssetRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ship record.
    #[must_use]
    pub fn with_ship(mut self, ship: ShipRecord) -> Self {
        self.ships.push(ship);
        self
    }
}

#[async_trait]
impl AssetRepository for FakeAssetRepository {
    async fn ships_for_owner(&self, owner_id: i64) -> Result<Vec<ShipRecord>, DomainError> {
        Ok(self
            .ships
            .iter()
            .filter(|s| s.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn find_ship(&self, asset_id: i64) -> Result<Option<ShipRecord>, DomainError> {
        Ok(self.ships.iter().find(|s| s.asset_id == asset_id).cloned())
    }
}

/// A session repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionRepository;

#[async_trait]
impl SessionRepository for FailingSessionRepository {
    async fn user_for_token(&self, _token: &str) -> Result<Option<UserRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A character repository that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingCharacterRepository;

#[async_trait]
impl CharacterRepository for FailingCharacterRepository {
    async fn list_for_owner(&self, _owner_id: i64) -> Result<Vec<CharacterRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find(&self, _character_id: i64) -> Result<Option<CharacterRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn skills_for_character(
        &self,
        _character_id: i64,
    ) -> Result<Vec<SkillRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn implants_for_character(
        &self,
        _character_id: i64,
    ) -> Result<Vec<ImplantRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn clones_for_character(
        &self,
        _character_id: i64,
    ) -> Result<Vec<CloneRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn disconnect_token(&self, _character_id: i64) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// An asset repository that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingAssetRepository;

#[async_trait]
impl AssetRepository for FailingAssetRepository {
    async fn ships_for_owner(&self, _owner_id: i64) -> Result<Vec<ShipRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_ship(&self, _asset_id: i64) -> Result<Option<ShipRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

//! Shared application state.

use std::sync::Arc;

use eveboard_core::repository::{AssetRepository, CharacterRepository, SessionRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Character, skill, implant, and clone access.
    pub characters: Arc<dyn CharacterRepository>,
    /// Ship asset access.
    pub assets: Arc<dyn AssetRepository>,
    /// Bearer-session resolution.
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        characters: Arc<dyn CharacterRepository>,
        assets: Arc<dyn AssetRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            characters,
            assets,
            sessions,
        }
    }
}

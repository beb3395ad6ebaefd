//! Shared test fakes and fixtures for the eveboard character portal.

mod fixtures;
mod repository;

pub use fixtures::{character, clone_record, implant, ship, skill, user};
pub use repository::{
    FailingAssetRepository, FailingCharacterRepository, FailingSessionRepository,
    FakeAssetRepository, FakeCharacterRepository, FakeSessionRepository,
};

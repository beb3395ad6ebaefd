//! Query handlers for the Character & Skills context.
//!
//! Handlers fetch records through the `CharacterRepository` trait and
//! assemble read-only view DTOs. All results are scoped to the calling
//! account.

use eveboard_core::error::DomainError;
use eveboard_core::repository::CharacterRepository;

use crate::domain::skills::{group_skills, total_skillpoints};
use crate::domain::views::{
    AffiliationView, CharacterSheetView, CharacterSummaryView, CloneView, ImplantView, StationView,
};

/// Lists the caller's characters, ordered by total skillpoints descending.
/// Ties are broken by character name so the order is deterministic.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_characters(
    owner_id: i64,
    repo: &dyn CharacterRepository,
) -> Result<Vec<CharacterSummaryView>, DomainError> {
    let mut records = repo.list_for_owner(owner_id).await?;
    records.sort_by(|a, b| {
        b.total_skillpoints
            .cmp(&a.total_skillpoints)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(records.into_iter().map(CharacterSummaryView::from).collect())
}

/// Retrieves the full sheet for one of the caller's characters.
///
/// # Errors
///
/// Returns `DomainError::CharacterNotFound` if the character does not exist
/// or belongs to a different account — ownership is not leaked through a
/// distinct error. Returns `DomainError::Infrastructure` if the repository
/// fails.
pub async fn get_character_sheet(
    owner_id: i64,
    character_id: i64,
    repo: &dyn CharacterRepository,
) -> Result<CharacterSheetView, DomainError> {
    let character = repo
        .find(character_id)
        .await?
        .filter(|c| c.owner_id == Some(owner_id))
        .ok_or(DomainError::CharacterNotFound(character_id))?;

    let skills = repo.skills_for_character(character_id).await?;
    let implants = repo.implants_for_character(character_id).await?;
    let clones = repo.clones_for_character(character_id).await?;

    let total = total_skillpoints(&skills);
    Ok(CharacterSheetView {
        character_id: character.id,
        name: character.name,
        corporation: character.corporation.map(AffiliationView::from),
        alliance: character.alliance.map(AffiliationView::from),
        home_station: character.home.map(StationView::from),
        active_ship: character.active_ship,
        total_skillpoints: total,
        skill_groups: group_skills(skills),
        implants: implants.into_iter().map(ImplantView::from).collect(),
        clones: clones.into_iter().map(CloneView::from).collect(),
    })
}

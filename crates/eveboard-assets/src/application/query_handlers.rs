//! Query handlers for the Ship Hangar context.

use eveboard_core::error::DomainError;
use eveboard_core::repository::AssetRepository;

use crate::domain::ships::{hangar_order, is_listable};
use crate::domain::views::{ShipDetailView, ShipListingView};

/// Lists every listable ship across the caller's characters, in hangar
/// order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_ships(
    owner_id: i64,
    repo: &dyn AssetRepository,
) -> Result<Vec<ShipListingView>, DomainError> {
    let mut ships: Vec<_> = repo
        .ships_for_owner(owner_id)
        .await?
        .into_iter()
        .filter(is_listable)
        .collect();
    ships.sort_by(hangar_order);
    tracing::debug!(owner_id, count = ships.len(), "assembled hangar list");
    Ok(ships.into_iter().map(ShipListingView::from).collect())
}

/// Retrieves one ship by asset ID.
///
/// # Errors
///
/// Returns `DomainError::AssetNotFound` for an unknown asset,
/// `DomainError::NotOwner` if the ship's pilot belongs to a different
/// account, and `DomainError::Infrastructure` if the repository fails.
pub async fn get_ship(
    owner_id: i64,
    asset_id: i64,
    repo: &dyn AssetRepository,
) -> Result<ShipDetailView, DomainError> {
    let ship = repo
        .find_ship(asset_id)
        .await?
        .ok_or(DomainError::AssetNotFound(asset_id))?;

    if ship.owner_id != Some(owner_id) {
        let name = ship.name.unwrap_or(ship.type_name);
        return Err(DomainError::NotOwner { name });
    }

    Ok(ShipDetailView::from(ship))
}

#[cfg(test)]
mod tests {
    use eveboard_core::constants::CAPSULE_GROUP_ID;
    use eveboard_core::error::DomainError;
    use eveboard_test_support::{FailingAssetRepository, FakeAssetRepository, ship};

    use super::*;

    #[tokio::test]
    async fn test_list_ships_filters_capsules_and_sorts_in_hangar_order() {
        // Arrange — a capsule, plus two hulls in different regions, inserted
        // out of order.
        let mut capsule = ship(1, 90_000_001, Some(1));
        capsule.group_id = CAPSULE_GROUP_ID;
        let mut forge_hull = ship(2, 90_000_001, Some(1));
        forge_hull.region_name = "The Forge".to_owned();
        let mut domain_hull = ship(3, 90_000_001, Some(1));
        domain_hull.region_name = "Domain".to_owned();
        domain_hull.system_name = "Amarr".to_owned();

        let repo = FakeAssetRepository::new()
            .with_ship(capsule)
            .with_ship(forge_hull)
            .with_ship(domain_hull);

        // Act
        let listings = list_ships(1, &repo).await.unwrap();

        // Assert
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].region, "Domain");
        assert_eq!(listings[1].region, "The Forge");
    }

    #[tokio::test]
    async fn test_list_ships_is_scoped_to_the_calling_account() {
        // Arrange
        let repo = FakeAssetRepository::new()
            .with_ship(ship(1, 90_000_001, Some(1)))
            .with_ship(ship(2, 90_000_002, Some(2)));

        // Act
        let listings = list_ships(1, &repo).await.unwrap();

        // Assert
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].asset_id, 1);
    }

    #[tokio::test]
    async fn test_list_ships_orders_heaviest_hull_first_within_a_system() {
        // Arrange
        let mut frigate = ship(1, 90_000_001, Some(1));
        frigate.mass = 1_067_000.0;
        frigate.type_name = "Rifter".to_owned();
        let mut battleship = ship(2, 90_000_001, Some(1));
        battleship.mass = 103_600_000.0;
        battleship.type_name = "Tempest".to_owned();
        battleship.group_name = "Battleship".to_owned();
        battleship.group_id = 27;

        let repo = FakeAssetRepository::new()
            .with_ship(frigate)
            .with_ship(battleship);

        // Act
        let listings = list_ships(1, &repo).await.unwrap();

        // Assert
        assert_eq!(listings[0].type_name, "Tempest");
        assert_eq!(listings[1].type_name, "Rifter");
    }

    #[tokio::test]
    async fn test_get_ship_returns_detail_for_owned_ship() {
        // Arrange
        let mut rifter = ship(42, 90_000_001, Some(1));
        rifter.name = Some("Old Faithful".to_owned());
        let repo = FakeAssetRepository::new().with_ship(rifter);

        // Act
        let detail = get_ship(1, 42, &repo).await.unwrap();

        // Assert
        assert_eq!(detail.asset_id, 42);
        assert_eq!(detail.name.as_deref(), Some("Old Faithful"));
        assert_eq!(detail.type_name, "Rifter");
    }

    #[tokio::test]
    async fn test_get_ship_detail_does_not_apply_hangar_exclusions() {
        // Arrange — a capsule never shows in the list but is still fetchable.
        let mut capsule = ship(7, 90_000_001, Some(1));
        capsule.group_id = CAPSULE_GROUP_ID;
        capsule.group_name = "Capsule".to_owned();
        let repo = FakeAssetRepository::new().with_ship(capsule);

        // Act
        let detail = get_ship(1, 7, &repo).await.unwrap();

        // Assert
        assert_eq!(detail.group_name, "Capsule");
    }

    #[tokio::test]
    async fn test_get_ship_returns_not_found_for_unknown_asset() {
        // Arrange
        let repo = FakeAssetRepository::new();

        // Act
        let result = get_ship(1, 42, &repo).await;

        // Assert
        match result.unwrap_err() {
            DomainError::AssetNotFound(id) => assert_eq!(id, 42),
            other => panic!("expected AssetNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_ship_rejects_foreign_ship() {
        // Arrange
        let repo = FakeAssetRepository::new().with_ship(ship(42, 90_000_002, Some(2)));

        // Act
        let result = get_ship(1, 42, &repo).await;

        // Assert
        match result.unwrap_err() {
            DomainError::NotOwner { name } => assert_eq!(name, "Rifter"),
            other => panic!("expected NotOwner, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_ships_propagates_infrastructure_errors() {
        // Act
        let result = list_ships(1, &FailingAssetRepository).await;

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Infrastructure(_)
        ));
    }
}

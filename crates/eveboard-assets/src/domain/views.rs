//! Read-only view DTOs returned by the hangar handlers.

use eveboard_core::records::ShipRecord;
use serde::Serialize;

/// One row of the hangar list.
#[derive(Debug, Serialize)]
pub struct ShipListingView {
    /// Asset item identifier.
    pub asset_id: i64,
    /// Player-given ship name, if any.
    pub name: Option<String>,
    /// Pilot the ship belongs to.
    pub character_name: String,
    /// Hull type name.
    pub type_name: String,
    /// Hull group name.
    pub group_name: String,
    /// Hull mass in kilograms.
    pub mass: f64,
    /// Solar system the ship is parked in.
    pub system: String,
    /// Region containing that system.
    pub region: String,
}

impl From<ShipRecord> for ShipListingView {
    fn from(record: ShipRecord) -> Self {
        Self {
            asset_id: record.asset_id,
            name: record.name,
            character_name: record.character_name,
            type_name: record.type_name,
            group_name: record.group_name,
            mass: record.mass,
            system: record.system_name,
            region: record.region_name,
        }
    }
}

/// The single-ship detail view.
#[derive(Debug, Serialize)]
pub struct ShipDetailView {
    /// Asset item identifier.
    pub asset_id: i64,
    /// Player-given ship name, if any.
    pub name: Option<String>,
    /// Pilot the ship belongs to.
    pub character_id: i64,
    /// Name of that pilot.
    pub character_name: String,
    /// Hull type identifier.
    pub type_id: i64,
    /// Hull type name.
    pub type_name: String,
    /// Hull group name.
    pub group_name: String,
    /// Hull mass in kilograms.
    pub mass: f64,
    /// Solar system the ship is parked in.
    pub system: String,
    /// Region containing that system.
    pub region: String,
}

impl From<ShipRecord> for ShipDetailView {
    fn from(record: ShipRecord) -> Self {
        Self {
            asset_id: record.asset_id,
            name: record.name,
            character_id: record.character_id,
            character_name: record.character_name,
            type_id: record.type_id,
            type_name: record.type_name,
            group_name: record.group_name,
            mass: record.mass,
            system: record.system_name,
            region: record.region_name,
        }
    }
}

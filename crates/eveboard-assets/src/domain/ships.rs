//! Hangar policy — which ship assets are listed, and in what order.

use std::cmp::Ordering;

use eveboard_core::constants::{CAPSULE_GROUP_ID, ROOKIE_SHIP_GROUP_ID};
use eveboard_core::records::ShipRecord;

/// Whether a ship-category asset appears in the hangar list.
///
/// Repositories already narrow to assembled ship-category assets in a known
/// solar system; on top of that, capsules and rookie ships are never listed.
#[must_use]
pub fn is_listable(ship: &ShipRecord) -> bool {
    ship.group_id != CAPSULE_GROUP_ID && ship.group_id != ROOKIE_SHIP_GROUP_ID
}

/// Hangar ordering: region, system, pilot, hull mass heaviest-first, group,
/// then type name. Total for any pair of records.
#[must_use]
pub fn hangar_order(a: &ShipRecord, b: &ShipRecord) -> Ordering {
    a.region_name
        .cmp(&b.region_name)
        .then_with(|| a.system_name.cmp(&b.system_name))
        .then_with(|| a.character_name.cmp(&b.character_name))
        .then_with(|| b.mass.total_cmp(&a.mass))
        .then_with(|| a.group_name.cmp(&b.group_name))
        .then_with(|| a.type_name.cmp(&b.type_name))
}

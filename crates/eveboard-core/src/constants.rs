//! Identifiers from the EVE static data export that the domain keys on.

/// Item category covering every flyable ship hull.
pub const SHIP_CATEGORY_ID: i64 = 6;

/// Capsule (pod) group. Capsules are ship-category singletons but are never
/// listed in the hangar.
pub const CAPSULE_GROUP_ID: i64 = 29;

/// Rookie-ship (corvette) group, likewise excluded from the hangar.
pub const ROOKIE_SHIP_GROUP_ID: i64 = 237;

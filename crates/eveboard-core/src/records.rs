//! Plain data records returned by the repository traits.
//!
//! Records carry rows out of the persistence layer; the bounded-context
//! crates turn them into serializable views. Identifiers are the `i64` IDs
//! used by the EVE static data export and ESI.

/// A web account that characters can be linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Account identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
}

/// A corporation or alliance a character belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationRecord {
    /// Corporation/alliance identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Short ticker, e.g. `C C P`.
    pub ticker: String,
}

/// A station a character can call home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    /// Station identifier.
    pub id: i64,
    /// Station name.
    pub name: String,
    /// Name of the solar system the station sits in.
    pub system_name: String,
}

/// An in-game character row, joined with its affiliations.
#[derive(Debug, Clone)]
pub struct CharacterRecord {
    /// Character identifier.
    pub id: i64,
    /// Character name.
    pub name: String,
    /// Owning account, if the character is linked.
    pub owner_id: Option<i64>,
    /// SSO token row backing the link, if any.
    pub token_id: Option<i64>,
    /// Current corporation.
    pub corporation: Option<AffiliationRecord>,
    /// Current alliance.
    pub alliance: Option<AffiliationRecord>,
    /// Home station.
    pub home: Option<StationRecord>,
    /// Type name of the ship the character is currently flying.
    pub active_ship: Option<String>,
    /// Sum of skillpoints across every trained skill; 0 when untrained.
    pub total_skillpoints: i64,
}

/// One trained skill of a character, joined with its type and group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    /// Skill type identifier.
    pub type_id: i64,
    /// Skill type name, e.g. `Spaceship Command`.
    pub type_name: String,
    /// Skill group name, e.g. `Gunnery`.
    pub group_name: String,
    /// Trained level, 0 through 5.
    pub trained_level: i16,
    /// Skillpoints accumulated in this skill.
    pub skillpoints: i64,
}

/// An implant plugged into a character or a jump clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplantRecord {
    /// Implant type identifier.
    pub type_id: i64,
    /// Implant type name.
    pub type_name: String,
}

/// A jump clone with its implant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRecord {
    /// Clone row identifier.
    pub id: i64,
    /// Player-given clone name, if any.
    pub name: Option<String>,
    /// Name of the station the clone is stored at, if known.
    pub location: Option<String>,
    /// Implants plugged into the clone.
    pub implants: Vec<ImplantRecord>,
}

/// An assembled ship asset, joined with its type, pilot, and location.
///
/// Repositories return only ship-category singletons located in a known
/// solar system; group-level exclusions are applied by the hangar domain.
#[derive(Debug, Clone)]
pub struct ShipRecord {
    /// Asset item identifier.
    pub asset_id: i64,
    /// Player-given ship name, if any.
    pub name: Option<String>,
    /// Character the ship belongs to.
    pub character_id: i64,
    /// Name of that character.
    pub character_name: String,
    /// Account owning that character, if linked.
    pub owner_id: Option<i64>,
    /// Hull type identifier.
    pub type_id: i64,
    /// Hull type name, e.g. `Rifter`.
    pub type_name: String,
    /// Hull group identifier, e.g. the frigate group.
    pub group_id: i64,
    /// Hull group name.
    pub group_name: String,
    /// Hull mass in kilograms.
    pub mass: f64,
    /// Solar system the ship is parked in.
    pub system_name: String,
    /// Region containing that system.
    pub region_name: String,
}

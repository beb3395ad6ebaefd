//! Record fixture builders.
//!
//! Builders fill in plausible defaults; tests overwrite individual fields
//! through the records' public fields where a scenario needs it.

use eveboard_core::records::{
    AffiliationRecord, CharacterRecord, CloneRecord, ImplantRecord, ShipRecord, SkillRecord,
    UserRecord,
};

/// An account with the given ID and username.
#[must_use]
pub fn user(id: i64, username: &str) -> UserRecord {
    UserRecord {
        id,
        username: username.to_owned(),
    }
}

/// A character linked (or not) to an account, with no affiliations and no
/// trained skills. `token_id` is populated whenever the character has an
/// owner, mirroring how linked characters look in production data.
#[must_use]
pub fn character(id: i64, name: &str, owner_id: Option<i64>) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_owned(),
        owner_id,
        token_id: owner_id.map(|_| 9_000 + id),
        corporation: Some(AffiliationRecord {
            id: 98_000_001,
            name: "Garoun Investment Bank".to_owned(),
            ticker: "GIBA".to_owned(),
        }),
        alliance: None,
        home: None,
        active_ship: None,
        total_skillpoints: 0,
    }
}

/// A trained skill.
#[must_use]
pub fn skill(
    type_id: i64,
    type_name: &str,
    group_name: &str,
    trained_level: i16,
    skillpoints: i64,
) -> SkillRecord {
    SkillRecord {
        type_id,
        type_name: type_name.to_owned(),
        group_name: group_name.to_owned(),
        trained_level,
        skillpoints,
    }
}

/// An implant.
#[must_use]
pub fn implant(type_id: i64, type_name: &str) -> ImplantRecord {
    ImplantRecord {
        type_id,
        type_name: type_name.to_owned(),
    }
}

/// A jump clone.
#[must_use]
pub fn clone_record(
    id: i64,
    name: Option<&str>,
    location: Option<&str>,
    implants: Vec<ImplantRecord>,
) -> CloneRecord {
    CloneRecord {
        id,
        name: name.map(str::to_owned),
        location: location.map(str::to_owned),
        implants,
    }
}

/// An assembled Rifter parked in Jita. Frigate group, real hull mass.
#[must_use]
pub fn ship(asset_id: i64, character_id: i64, owner_id: Option<i64>) -> ShipRecord {
    ShipRecord {
        asset_id,
        name: None,
        character_id,
        character_name: format!("Pilot {character_id}"),
        owner_id,
        type_id: 587,
        type_name: "Rifter".to_owned(),
        group_id: 25,
        group_name: "Frigate".to_owned(),
        mass: 1_067_000.0,
        system_name: "Jita".to_owned(),
        region_name: "The Forge".to_owned(),
    }
}

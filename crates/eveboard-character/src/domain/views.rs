//! Read-only view DTOs returned by the character handlers.

use eveboard_core::records::{
    AffiliationRecord, CharacterRecord, CloneRecord, ImplantRecord, SkillRecord, StationRecord,
};
use serde::Serialize;

/// Corporation or alliance membership as shown next to a character.
#[derive(Debug, Serialize)]
pub struct AffiliationView {
    /// Full name.
    pub name: String,
    /// Short ticker.
    pub ticker: String,
}

impl From<AffiliationRecord> for AffiliationView {
    fn from(record: AffiliationRecord) -> Self {
        Self {
            name: record.name,
            ticker: record.ticker,
        }
    }
}

/// A station location.
#[derive(Debug, Serialize)]
pub struct StationView {
    /// Station name.
    pub name: String,
    /// Solar system the station sits in.
    pub system: String,
}

impl From<StationRecord> for StationView {
    fn from(record: StationRecord) -> Self {
        Self {
            name: record.name,
            system: record.system_name,
        }
    }
}

/// One row of the character list.
#[derive(Debug, Serialize)]
pub struct CharacterSummaryView {
    /// Character identifier.
    pub character_id: i64,
    /// Character name.
    pub name: String,
    /// Current corporation.
    pub corporation: Option<AffiliationView>,
    /// Current alliance.
    pub alliance: Option<AffiliationView>,
    /// Sum of skillpoints across every trained skill.
    pub total_skillpoints: i64,
}

impl From<CharacterRecord> for CharacterSummaryView {
    fn from(record: CharacterRecord) -> Self {
        Self {
            character_id: record.id,
            name: record.name,
            corporation: record.corporation.map(AffiliationView::from),
            alliance: record.alliance.map(AffiliationView::from),
            total_skillpoints: record.total_skillpoints,
        }
    }
}

/// One trained skill on the character sheet.
#[derive(Debug, Serialize)]
pub struct SkillView {
    /// Skill type identifier.
    pub type_id: i64,
    /// Skill type name.
    pub name: String,
    /// Trained level, 0 through 5.
    pub trained_level: i16,
    /// Skillpoints accumulated in this skill.
    pub skillpoints: i64,
}

impl From<SkillRecord> for SkillView {
    fn from(record: SkillRecord) -> Self {
        Self {
            type_id: record.type_id,
            name: record.type_name,
            trained_level: record.trained_level,
            skillpoints: record.skillpoints,
        }
    }
}

/// A skill group with its members and subtotal.
#[derive(Debug, Serialize)]
pub struct SkillGroupView {
    /// Group name, e.g. `Gunnery`.
    pub name: String,
    /// Sum of skillpoints over the group's skills.
    pub total_skillpoints: i64,
    /// Skills in the group, ordered by name.
    pub skills: Vec<SkillView>,
}

/// An implant on the sheet.
#[derive(Debug, Serialize)]
pub struct ImplantView {
    /// Implant type identifier.
    pub type_id: i64,
    /// Implant type name.
    pub name: String,
}

impl From<ImplantRecord> for ImplantView {
    fn from(record: ImplantRecord) -> Self {
        Self {
            type_id: record.type_id,
            name: record.type_name,
        }
    }
}

/// A jump clone on the sheet.
#[derive(Debug, Serialize)]
pub struct CloneView {
    /// Player-given clone name, if any.
    pub name: Option<String>,
    /// Station the clone is stored at, if known.
    pub location: Option<String>,
    /// Implants plugged into the clone.
    pub implants: Vec<ImplantView>,
}

impl From<CloneRecord> for CloneView {
    fn from(record: CloneRecord) -> Self {
        Self {
            name: record.name,
            location: record.location,
            implants: record.implants.into_iter().map(ImplantView::from).collect(),
        }
    }
}

/// The full character sheet.
#[derive(Debug, Serialize)]
pub struct CharacterSheetView {
    /// Character identifier.
    pub character_id: i64,
    /// Character name.
    pub name: String,
    /// Current corporation.
    pub corporation: Option<AffiliationView>,
    /// Current alliance.
    pub alliance: Option<AffiliationView>,
    /// Home station.
    pub home_station: Option<StationView>,
    /// Type name of the ship currently being flown.
    pub active_ship: Option<String>,
    /// Sum of skillpoints across every trained skill.
    pub total_skillpoints: i64,
    /// Skills grouped by skill group, groups in alphabetical order.
    pub skill_groups: Vec<SkillGroupView>,
    /// Implants currently plugged in.
    pub implants: Vec<ImplantView>,
    /// Jump clones.
    pub clones: Vec<CloneView>,
}

//! Grouping of trained skills into skill groups.

use std::collections::BTreeMap;

use eveboard_core::records::SkillRecord;

use super::views::{SkillGroupView, SkillView};

/// Groups skills by skill group name.
///
/// Groups come back in alphabetical order, skills within a group are ordered
/// by skill name, and each group carries the sum of its skillpoints.
#[must_use]
pub fn group_skills(skills: Vec<SkillRecord>) -> Vec<SkillGroupView> {
    let mut by_group: BTreeMap<String, Vec<SkillRecord>> = BTreeMap::new();
    for skill in skills {
        by_group.entry(skill.group_name.clone()).or_default().push(skill);
    }

    by_group
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by(|a, b| a.type_name.cmp(&b.type_name));
            let total_skillpoints = members.iter().map(|s| s.skillpoints).sum();
            SkillGroupView {
                name,
                total_skillpoints,
                skills: members.into_iter().map(SkillView::from).collect(),
            }
        })
        .collect()
}

/// Sum of skillpoints over a set of trained skills.
#[must_use]
pub fn total_skillpoints(skills: &[SkillRecord]) -> i64 {
    skills.iter().map(|s| s.skillpoints).sum()
}

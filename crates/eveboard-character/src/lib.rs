//! eveboard — Character & Skills bounded context.
//!
//! Responsible for the character list, the full character sheet (skills
//! grouped by skill group, implants, jump clones), and disconnecting a
//! character's SSO token.

pub mod application;
pub mod domain;

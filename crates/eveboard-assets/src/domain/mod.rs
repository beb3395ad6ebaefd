//! Domain types and rules for the Ship Hangar context.

pub mod ships;
pub mod views;

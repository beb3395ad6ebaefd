//! eveboard — Ship Hangar bounded context.
//!
//! Responsible for listing the assembled ships parked across a user's
//! characters and for the single-ship detail view.

pub mod application;
pub mod domain;

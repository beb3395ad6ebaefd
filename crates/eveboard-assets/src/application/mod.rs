//! Application layer for the Ship Hangar context.

pub mod query_handlers;

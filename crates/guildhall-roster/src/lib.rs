//! Guildhall — roster management.
//!
//! Responsible for registering guilds and for creating characters that
//! belong to an existing guild.

pub mod application;
pub mod domain;

//! Domain layer for the roster.

pub mod commands;

//! Application layer for the roster.

pub mod command_handlers;

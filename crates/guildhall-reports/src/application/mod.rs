//! Application layer for reports.

pub mod query_handlers;

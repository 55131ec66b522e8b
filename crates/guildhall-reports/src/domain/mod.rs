//! Domain layer for reports.

pub mod encoder;
pub mod report;

//! Guildhall — CSV reports.
//!
//! Renders the current roster as downloadable CSV files. Rendering only
//! reads from the roster repository.

pub mod application;
pub mod domain;

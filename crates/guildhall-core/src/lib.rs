//! Guildhall Core — entity model and shared abstractions.
//!
//! This crate defines the guild and character records, the closed race
//! domain, and the traits the application crates depend on. It contains no
//! infrastructure code.

pub mod character;
pub mod command;
pub mod error;
pub mod guild;
pub mod race;
pub mod repository;
pub mod rng;
pub mod timestamp;

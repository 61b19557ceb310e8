//! `gilded-rose-core`: domain foundation shared by the inventory rules.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, clamp_quality};

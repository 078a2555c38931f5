//! Use-case services layered over the storage gateway.
//!
//! # Responsibility
//! - Read-only aggregation for the home page.
//! - Whole-store snapshot export and import.
//! - Appearance settings.
//!
//! # Invariants
//! - Services never bypass typed decoding when writing store keys.

pub mod appearance;
pub mod snapshot;
pub mod summary;

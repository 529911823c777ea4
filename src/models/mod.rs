//! Scheduling domain models.
//!
//! Core data types for the slot-based ad scheduler: the input demand
//! ([`AdRecord`]), its per-slot expansion ([`AdUnit`]), the day x slot
//! placement grid ([`ScheduleGrid`]), and the run outcome
//! ([`PlacementResult`]).
//!
//! Ownership is strictly one-directional: ad records are owned by the
//! caller and only read by the engine; the grid and its units are owned
//! by a single scheduling run.

mod ad;
mod grid;

pub use ad::{AdRecord, AdUnit};
pub use grid::{PlacementResult, ScheduleGrid};

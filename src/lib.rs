//! Slot-based greedy ad scheduler.
//!
//! Packs advertisement demand into a fixed day x slot grid to maximize
//! total profit, subject to per-ad deadlines and an adjacency rule that
//! forbids two consecutive slots from sharing an ad name or category.
//! The placement heuristic is greedy first-fit over profit-density
//! ranked units: fast and deterministic, with no optimality guarantee.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `AdRecord`, `AdUnit`, `ScheduleGrid`,
//!   `PlacementResult`
//! - **`scheduler`**: The allocation engine: expansion, density
//!   ranking, first-fit placement, per-ad summary
//! - **`validation`**: Boundary input checks (ids, required fields,
//!   grid dimensions)
//! - **`store`**: JSON-file persistence for the ad list (CRUD)
//! - **`render`**: Plain-text grid and summary rendering
//!
//! # Determinism
//!
//! Two runs over identical input produce bit-identical grids and
//! totals, including under profit-density ties; the ranking sort is
//! stable and falls back to input order. Each run owns its grid
//! exclusively, so concurrent callers need no locking.

pub mod models;
pub mod render;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use models::{AdRecord, AdUnit, PlacementResult, ScheduleGrid};
pub use scheduler::{ScheduleSummary, SlotScheduler};

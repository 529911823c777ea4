//! Greedy first-fit placement engine.
//!
//! # Algorithm
//!
//! 1. Expand ads into unit demands (one per slot needed).
//! 2. Rank units by profit density, descending, stable on ties.
//! 3. For each unit, scan the grid in ascending (day, slot) order up to
//!    the ad's deadline and take the first free cell whose immediate
//!    predecessor shares neither ad name nor category.
//!
//! A unit that fits nowhere is dropped permanently: no backtracking, no
//! retry, no spill past the deadline. That is a normal outcome reported
//! through the summary, not an error.
//!
//! # Complexity
//! O(U log U) ranking plus O(U * D * S) placement, for U units on a
//! D-day, S-slot grid.

use crate::models::{AdRecord, PlacementResult, ScheduleGrid};

use super::expansion::expand_ads;
use super::ranking::rank_by_density;

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Ads to place.
    pub ads: Vec<AdRecord>,
    /// Number of days in the grid.
    pub total_days: usize,
    /// Number of slots in each day.
    pub slots_per_day: usize,
}

impl ScheduleRequest {
    /// Creates a request for the given grid dimensions.
    pub fn new(ads: Vec<AdRecord>, total_days: usize, slots_per_day: usize) -> Self {
        Self {
            ads,
            total_days,
            slots_per_day,
        }
    }
}

/// Greedy slot-based ad scheduler.
///
/// A pure function over an immutable input snapshot: every run builds
/// its own grid and unit sequence, shares no state with any other run,
/// and always terminates. Callers embedding the engine in a concurrent
/// host need no locking; isolation holds by construction.
///
/// # Example
///
/// ```
/// use ad_scheduler::models::AdRecord;
/// use ad_scheduler::scheduler::SlotScheduler;
///
/// let ads = vec![AdRecord::new(1, "Quantum Laptop")
///     .with_category("Technology")
///     .with_duration(3)
///     .with_profit(300.0)
///     .with_deadline(1)];
///
/// let result = SlotScheduler::new().schedule(&ads, 1, 3);
/// assert_eq!(result.grid.occupied_count(), 3);
/// assert_eq!(result.total_profit_rounded(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotScheduler;

impl SlotScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs one scheduling pass over a fresh grid.
    ///
    /// Non-positive (`0`) dimensions simply yield an all-empty grid:
    /// the engine validates nothing beyond using them as loop bounds.
    pub fn schedule(
        &self,
        ads: &[AdRecord],
        total_days: usize,
        slots_per_day: usize,
    ) -> PlacementResult {
        let mut grid = ScheduleGrid::new(total_days, slots_per_day);

        let mut units = expand_ads(ads);
        rank_by_density(&mut units);

        let mut total_profit = 0.0_f64;

        for unit in units {
            let day_bound = unit.deadline.min(total_days);
            'scan: for day in 0..day_bound {
                for slot in 0..slots_per_day {
                    if grid.cell(day, slot).is_some() {
                        continue;
                    }
                    if let Some(prev) = grid.predecessor(day, slot) {
                        if prev.ad_name == unit.ad_name || prev.category == unit.category {
                            continue;
                        }
                    }
                    total_profit += unit.profit_per_slot;
                    grid.place(day, slot, unit);
                    break 'scan; // first fit, not best fit
                }
            }
        }

        PlacementResult { grid, total_profit }
    }

    /// Runs one scheduling pass from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> PlacementResult {
        self.schedule(&request.ads, request.total_days, request.slots_per_day)
    }
}

//! The greedy allocation engine.
//!
//! Three stages run as one synchronous pass with no suspension points
//! and no I/O:
//!
//! 1. **Expansion** ([`expand_ads`]): each ad becomes one unit per slot
//!    it demands; non-positive durations are dropped silently.
//! 2. **Ranking** ([`rank_by_density`]): stable sort by profit density,
//!    descending; ties keep expansion order so runs are deterministic.
//! 3. **Placement** ([`SlotScheduler`]): first-fit scan over the grid,
//!    bounded by each ad's deadline, rejecting cells whose immediate
//!    predecessor shares the ad's name or category.
//!
//! [`ScheduleSummary`] then derives per-ad utilization from the result.
//!
//! The engine is a greedy heuristic, not an optimal packer: it never
//! backtracks, never swaps placed units, and never re-optimizes.

mod expansion;
mod greedy;
mod ranking;
mod summary;

pub use expansion::expand_ads;
pub use greedy::{ScheduleRequest, SlotScheduler};
pub use ranking::rank_by_density;
pub use summary::{AdUtilization, ScheduleSummary};

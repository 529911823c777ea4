//! Per-ad utilization summary.
//!
//! Derives, from a completed placement and the original ad list, how
//! many of each ad's requested slots were actually scheduled and how
//! much profit that achieved. Unplaced demand shows up here as a
//! shortfall, never as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{AdRecord, PlacementResult};

/// One ad's achieved share of its requested demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdUtilization {
    /// Ad name (the aggregation key; ads sharing a name share a row's numbers).
    pub name: String,
    /// Units actually placed in the grid.
    pub scheduled_slots: usize,
    /// Units the ad asked for (0 for invalid non-positive durations).
    pub requested_slots: usize,
    /// Sum of `profit_per_slot` over the placed units.
    pub achieved_profit: f64,
}

/// Per-ad summary of a scheduling run.
///
/// Rows follow the original input ad order, not placement order, and
/// every input ad appears even with zero placed units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// One row per input ad, in input order.
    pub ads: Vec<AdUtilization>,
}

impl ScheduleSummary {
    /// Computes the summary from a placement result and the input ads.
    ///
    /// Achieved profit is summed over placed units rather than derived
    /// from `scheduled_slots * rate`; the two agree because every unit
    /// of an ad carries the same per-slot rate.
    pub fn calculate(result: &PlacementResult, ads: &[AdRecord]) -> Self {
        let mut by_name: HashMap<&str, (usize, f64)> = HashMap::new();
        for unit in result.grid.placed_units() {
            let entry = by_name.entry(unit.ad_name.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += unit.profit_per_slot;
        }

        let rows = ads
            .iter()
            .map(|ad| {
                let (scheduled_slots, achieved_profit) =
                    by_name.get(ad.name.as_str()).copied().unwrap_or((0, 0.0));
                AdUtilization {
                    name: ad.name.clone(),
                    scheduled_slots,
                    requested_slots: ad.duration.max(0) as usize,
                    achieved_profit,
                }
            })
            .collect();

        Self { ads: rows }
    }

    /// Number of summary rows.
    pub fn len(&self) -> usize {
        self.ads.len()
    }

    /// Whether the summary has no rows.
    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }
}

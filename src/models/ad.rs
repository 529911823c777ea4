//! Advertisement (demand) model.
//!
//! An [`AdRecord`] describes one advertisement's scheduling demand:
//! how many unit slots it needs, the total profit if fully placed,
//! and the latest day it may run. [`AdUnit`] is the derived, slot-sized
//! portion of that demand that the placement engine actually works with.

use serde::{Deserialize, Serialize};

/// One advertisement's scheduling demand.
///
/// # Keys
/// `name` and `category` are equality keys for the adjacency constraint:
/// two consecutive slots may not share either. `id` exists only for the
/// persistent store's CRUD operations; the engine never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    /// Store identifier (unique within one ad list).
    pub id: u64,
    /// Advertisement name (adjacency equality key).
    pub name: String,
    /// Advertisement category (adjacency equality key).
    pub category: String,
    /// Number of unit slots demanded. Records with `duration <= 0`
    /// are excluded from expansion entirely.
    pub duration: i64,
    /// Total profit realized if every unit is placed.
    pub profit: f64,
    /// Exclusive zero-based day bound: units may only run on days `< deadline`.
    pub deadline: usize,
}

impl AdRecord {
    /// Creates a new ad with the given id and name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: String::new(),
            duration: 0,
            profit: 0.0,
            deadline: 0,
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the slot demand.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the total profit.
    pub fn with_profit(mut self, profit: f64) -> Self {
        self.profit = profit;
        self
    }

    /// Sets the deadline (exclusive zero-based day bound).
    pub fn with_deadline(mut self, deadline: usize) -> Self {
        self.deadline = deadline;
        self
    }

    /// Profit per unit slot, or `None` for non-positive durations.
    pub fn profit_per_slot(&self) -> Option<f64> {
        if self.duration <= 0 {
            return None;
        }
        Some(self.profit / self.duration as f64)
    }
}

/// One slot-sized portion of an ad's demand.
///
/// Name, category, and deadline are denormalized from the source ad so
/// that the grid and its consumers need no back-reference into the input
/// list. `part` is 1-based and used only for display and auditing; it has
/// no effect on placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdUnit {
    /// Source ad name.
    pub ad_name: String,
    /// Source ad category.
    pub category: String,
    /// 1-based position within the ad's demand (1..=part_count).
    pub part: usize,
    /// Total unit count of the source ad.
    pub part_count: usize,
    /// Source ad deadline (exclusive zero-based day bound).
    pub deadline: usize,
    /// Profit contributed if this unit is placed.
    pub profit_per_slot: f64,
}

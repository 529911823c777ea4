//! Schedule grid and placement result.
//!
//! The grid is a fixed `days x slots_per_day` array of cells, each either
//! empty or holding exactly one placed [`AdUnit`]. A cell only ever
//! transitions empty -> occupied; a completed run's grid is not mutated
//! again.
//!
//! # Storage
//! Cells are stored flat in row-major (day-major) order. That makes the
//! adjacency rule's "single immediately preceding cell" literally
//! `index - 1`: the predecessor of the first slot of a day is the last
//! slot of the previous day, and the very first cell has none.

use serde::{Deserialize, Serialize};

use super::AdUnit;

/// A fixed-size day x slot grid of placed ad units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGrid {
    days: usize,
    slots_per_day: usize,
    cells: Vec<Option<AdUnit>>,
}

impl ScheduleGrid {
    /// Creates an empty grid. Zero dimensions yield a zero-cell grid.
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        Self {
            days,
            slots_per_day,
            cells: vec![None; days * slots_per_day],
        }
    }

    /// Number of days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Total cell count.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `(day, slot)`.
    ///
    /// # Panics
    /// Panics if `day` or `slot` is out of bounds.
    pub fn cell(&self, day: usize, slot: usize) -> Option<&AdUnit> {
        assert!(day < self.days && slot < self.slots_per_day);
        self.cells[day * self.slots_per_day + slot].as_ref()
    }

    /// The occupant of the single cell immediately preceding `(day, slot)`
    /// in slot order, wrapping across day boundaries. The very first cell
    /// of the grid has no predecessor.
    pub fn predecessor(&self, day: usize, slot: usize) -> Option<&AdUnit> {
        let idx = day * self.slots_per_day + slot;
        if idx == 0 {
            return None;
        }
        self.cells[idx - 1].as_ref()
    }

    /// Places a unit into an empty cell.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds or already occupied; callers
    /// check occupancy first.
    pub(crate) fn place(&mut self, day: usize, slot: usize, unit: AdUnit) {
        let cell = &mut self.cells[day * self.slots_per_day + slot];
        assert!(cell.is_none(), "cell ({day}, {slot}) already occupied");
        *cell = Some(unit);
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over days as slices of `slots_per_day` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<AdUnit>]> {
        self.cells.chunks(self.slots_per_day.max(1)).take(self.days)
    }

    /// Iterates over all occupied cells in slot order.
    pub fn placed_units(&self) -> impl Iterator<Item = &AdUnit> {
        self.cells.iter().filter_map(|c| c.as_ref())
    }
}

/// The outcome of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResult {
    /// The filled grid.
    pub grid: ScheduleGrid,
    /// Sum of `profit_per_slot` over all placed units, accumulated in
    /// full f64 precision as units were placed.
    pub total_profit: f64,
}

impl PlacementResult {
    /// Total profit rounded to two decimal places, for display.
    /// The stored `total_profit` keeps full precision.
    pub fn total_profit_rounded(&self) -> f64 {
        (self.total_profit * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_unit(name: &str, category: &str) -> AdUnit {
        AdUnit {
            ad_name: name.to_string(),
            category: category.to_string(),
            part: 1,
            part_count: 1,
            deadline: 1,
            profit_per_slot: 10.0,
        }
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = ScheduleGrid::new(2, 3);
        assert_eq!(grid.capacity(), 6);
        assert_eq!(grid.occupied_count(), 0);
        for d in 0..2 {
            for s in 0..3 {
                assert!(grid.cell(d, s).is_none());
            }
        }
    }

    #[test]
    fn test_place_and_read_back() {
        let mut grid = ScheduleGrid::new(1, 2);
        grid.place(0, 1, make_unit("A", "X"));
        assert!(grid.cell(0, 0).is_none());
        assert_eq!(grid.cell(0, 1).unwrap().ad_name, "A");
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_predecessor_within_day() {
        let mut grid = ScheduleGrid::new(1, 3);
        grid.place(0, 0, make_unit("A", "X"));
        assert_eq!(grid.predecessor(0, 1).unwrap().ad_name, "A");
        assert!(grid.predecessor(0, 2).is_none()); // (0,1) is empty
    }

    #[test]
    fn test_predecessor_wraps_day_boundary() {
        let mut grid = ScheduleGrid::new(2, 2);
        grid.place(0, 1, make_unit("A", "X"));
        // First slot of day 1 looks back at the last slot of day 0.
        assert_eq!(grid.predecessor(1, 0).unwrap().ad_name, "A");
    }

    #[test]
    fn test_first_cell_has_no_predecessor() {
        let grid = ScheduleGrid::new(3, 4);
        assert!(grid.predecessor(0, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_double_place_panics() {
        let mut grid = ScheduleGrid::new(1, 1);
        grid.place(0, 0, make_unit("A", "X"));
        grid.place(0, 0, make_unit("B", "Y"));
    }

    #[test]
    fn test_rows() {
        let mut grid = ScheduleGrid::new(2, 2);
        grid.place(1, 0, make_unit("A", "X"));
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(|c| c.is_none()));
        assert_eq!(rows[1][0].as_ref().unwrap().ad_name, "A");
    }

    #[test]
    fn test_zero_dimension_grid() {
        let grid = ScheduleGrid::new(0, 5);
        assert_eq!(grid.capacity(), 0);
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn test_total_profit_rounding() {
        let result = PlacementResult {
            grid: ScheduleGrid::new(0, 0),
            total_profit: 100.0 / 3.0,
        };
        assert_eq!(result.total_profit_rounded(), 33.33);
        // Full precision retained on the field itself.
        assert!((result.total_profit - 100.0 / 3.0).abs() < 1e-12);
    }
}

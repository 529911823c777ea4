//! Plain-text rendering of scheduling results.
//!
//! A thin presentation layer over the engine's output: day-by-day slot
//! listings, the rounded total-profit line, and a fixed-width per-ad
//! summary table. Imposes nothing back on the engine.

use std::fmt::Write;

use crate::models::{PlacementResult, ScheduleGrid};
use crate::scheduler::ScheduleSummary;

/// Renders the grid day by day, one line per slot.
///
/// Empty cells render as `-- empty --`; a day with no placements at all
/// collapses to a single `no ads scheduled` line.
pub fn render_grid(grid: &ScheduleGrid) -> String {
    let mut out = String::new();
    for (day_idx, row) in grid.rows().enumerate() {
        let _ = writeln!(out, "Day {}", day_idx + 1);
        if row.iter().all(|cell| cell.is_none()) {
            out.push_str("  no ads scheduled\n");
            continue;
        }
        for (slot_idx, cell) in row.iter().enumerate() {
            match cell {
                Some(unit) => {
                    let _ = writeln!(
                        out,
                        "  Slot {}: {} ({}) - part {} of {}",
                        slot_idx + 1,
                        unit.ad_name,
                        unit.category,
                        unit.part,
                        unit.part_count
                    );
                }
                None => {
                    let _ = writeln!(out, "  Slot {}: -- empty --", slot_idx + 1);
                }
            }
        }
    }
    out
}

/// Renders the total-profit line, rounded to two decimals.
pub fn render_profit(result: &PlacementResult) -> String {
    format!("Total profit: {:.2}", result.total_profit_rounded())
}

/// Renders the per-ad summary as a fixed-width text table.
pub fn render_summary(summary: &ScheduleSummary) -> String {
    let headers = ["Ad Name", "Slots Scheduled", "Profit Achieved"];
    let rows: Vec<[String; 3]> = summary
        .ads
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format!("{} / {}", row.scheduled_slots, row.requested_slots),
                format!("{:.2}", row.achieved_profit),
            ]
        })
        .collect();

    // Column widths from the widest of header and cells.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[&str]| {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i] - cell.len()));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, "{}", render_row(&headers));
    let _ = writeln!(out, "{sep}");
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", render_row(&cells));
    }
    let _ = writeln!(out, "{sep}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdRecord;
    use crate::scheduler::SlotScheduler;

    fn make_ad(name: &str, category: &str, duration: i64, profit: f64) -> AdRecord {
        AdRecord::new(0, name)
            .with_category(category)
            .with_duration(duration)
            .with_profit(profit)
            .with_deadline(2)
    }

    #[test]
    fn test_render_grid_lines() {
        let ads = vec![make_ad("A", "X", 1, 100.0)];
        let result = SlotScheduler::new().schedule(&ads, 2, 2);
        let text = render_grid(&result.grid);

        assert!(text.contains("Day 1"));
        assert!(text.contains("Slot 1: A (X) - part 1 of 1"));
        assert!(text.contains("Slot 2: -- empty --"));
        // Day 2 has nothing placed.
        assert!(text.contains("Day 2\n  no ads scheduled"));
    }

    #[test]
    fn test_render_profit_rounds() {
        let ads = vec![make_ad("A", "X", 3, 100.0)];
        let result = SlotScheduler::new().schedule(&ads, 2, 3);
        // 100/3 per slot is not 2-decimal exact; the line must round.
        let line = render_profit(&result);
        assert!(line.starts_with("Total profit: "));
        let value = line.trim_start_matches("Total profit: ");
        assert_eq!(value, format!("{:.2}", result.total_profit_rounded()));
    }

    #[test]
    fn test_render_summary_table() {
        let ads = vec![
            make_ad("Quantum Laptop", "Technology", 1, 400.0),
            make_ad("ghost", "X", 0, 100.0),
        ];
        let result = SlotScheduler::new().schedule(&ads, 1, 2);
        let summary = ScheduleSummary::calculate(&result, &ads);
        let table = render_summary(&summary);

        assert!(table.contains("| Ad Name"));
        assert!(table.contains("| Quantum Laptop"));
        assert!(table.contains("1 / 1"));
        assert!(table.contains("400.00"));
        // Invalid-duration ad still gets a zero row.
        assert!(table.contains("0 / 0"));
        assert!(table.contains("0.00"));
    }
}

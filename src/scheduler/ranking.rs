//! Profit-density ranking.
//!
//! Orders the expanded unit sequence by `profit_per_slot`, highest
//! first, so the placement scan considers the most valuable demand
//! before anything else.
//!
//! # Tie-break
//! Equal densities keep their expansion order: the sort must be stable,
//! because repeated runs on identical input are required to produce
//! identical schedules. `slice::sort_by` is stable, which makes the
//! expansion order the deterministic tie-break for free.

use std::cmp::Ordering;

use crate::models::AdUnit;

/// Sorts units by profit density, descending, stably.
///
/// Incomparable densities (NaN profit) compare equal, which keeps the
/// ordering total and the run deterministic.
pub fn rank_by_density(units: &mut [AdUnit]) {
    units.sort_by(|a, b| {
        b.profit_per_slot
            .partial_cmp(&a.profit_per_slot)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_unit(name: &str, part: usize, profit_per_slot: f64) -> AdUnit {
        AdUnit {
            ad_name: name.to_string(),
            category: "General".to_string(),
            part,
            part_count: 1,
            deadline: 1,
            profit_per_slot,
        }
    }

    #[test]
    fn test_descending_by_density() {
        let mut units = vec![
            make_unit("low", 1, 10.0),
            make_unit("high", 1, 300.0),
            make_unit("mid", 1, 150.0),
        ];
        rank_by_density(&mut units);
        let names: Vec<&str> = units.iter().map(|u| u.ad_name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_keep_expansion_order() {
        let mut units = vec![
            make_unit("first", 1, 50.0),
            make_unit("first", 2, 50.0),
            make_unit("second", 1, 50.0),
            make_unit("third", 1, 80.0),
        ];
        rank_by_density(&mut units);
        let names: Vec<(&str, usize)> = units.iter().map(|u| (u.ad_name.as_str(), u.part)).collect();
        // "third" wins outright; the 50.0 tie preserves input order.
        assert_eq!(
            names,
            vec![("third", 1), ("first", 1), ("first", 2), ("second", 1)]
        );
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let build = || {
            vec![
                make_unit("a", 1, 1.0),
                make_unit("b", 1, 1.0),
                make_unit("c", 1, 1.0),
            ]
        };
        let mut one = build();
        let mut two = build();
        rank_by_density(&mut one);
        rank_by_density(&mut two);
        assert_eq!(one, two);
    }
}

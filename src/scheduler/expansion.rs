//! Slot expansion.
//!
//! Turns each ad record into its constituent unit demands: one
//! [`AdUnit`] per slot the ad needs, all carrying the same
//! `profit_per_slot`. Records with non-positive duration are invalid
//! input and contribute nothing; they are dropped here silently rather
//! than reported as errors.

use crate::models::{AdRecord, AdUnit};

/// Expands ads into the flat unit sequence the ranker consumes.
///
/// Units of ad *i* precede units of ad *i+1*; within an ad, parts are in
/// ascending order. This expansion order is what the density ranking's
/// stable sort falls back to on ties, so it is part of the determinism
/// contract, not an incidental detail.
pub fn expand_ads(ads: &[AdRecord]) -> Vec<AdUnit> {
    let mut units = Vec::new();
    for ad in ads {
        let Some(profit_per_slot) = ad.profit_per_slot() else {
            continue; // duration <= 0: invalid, skipped entirely
        };
        let part_count = ad.duration as usize;
        for part in 1..=part_count {
            units.push(AdUnit {
                ad_name: ad.name.clone(),
                category: ad.category.clone(),
                part,
                part_count,
                deadline: ad.deadline,
                profit_per_slot,
            });
        }
    }
    units
}

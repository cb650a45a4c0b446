//! Region-sensitive rescaling of category scores.
//!
//! Each region gets a `(min_range, max_range, factor)` triple derived in
//! closed form from its health index. A raw score is rescaled from that
//! window onto 0-100, scaled by the factor, and clamped. Healthier regions
//! get a narrower, higher window and a larger factor, so the same raw input
//! generally adjusts to a higher score there. This is a deterministic
//! stand-in for the learned range compression used by earlier versions; it
//! keeps the direction of that behavior, not its exact numbers.

use serde::Serialize;

use super::error::ScoreError;
use crate::region::{RegionContext, RegionTable};

/// Half-width of the normalized window around the region's health index
const WINDOW_HALF_WIDTH: f64 = 0.2;

/// Lowest normalized value the window may start at
const WINDOW_FLOOR: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentRange {
    /// Lower bound of the rescaling window, 0-100
    pub min_range: f64,
    /// Upper bound of the rescaling window, 0-100
    pub max_range: f64,
    /// Multiplier applied after rescaling, 0-1
    pub factor: f64,
}

impl AdjustmentRange {
    pub fn for_region(ctx: &RegionContext) -> Self {
        let norm_health = ctx.health_index / 100.0;
        Self {
            min_range: (norm_health - WINDOW_HALF_WIDTH).clamp(WINDOW_FLOOR, 1.0) * 100.0,
            max_range: (norm_health + WINDOW_HALF_WIDTH).clamp(0.0, 1.0) * 100.0,
            factor: norm_health,
        }
    }

    /// Rescale a raw score into this window, always within [0, 100].
    pub fn apply(&self, raw_score: f64) -> f64 {
        let span = self.max_range - self.min_range;
        let adjusted = if span == 0.0 {
            self.factor * 100.0
        } else {
            (raw_score - self.min_range) / span * 100.0 * self.factor
        };
        adjusted.clamp(0.0, 100.0)
    }
}

/// Adjust a raw score for a known region context.
pub fn adjust_for(raw_score: f64, ctx: &RegionContext) -> f64 {
    AdjustmentRange::for_region(ctx).apply(raw_score)
}

/// Looks regions up in a table and rescales scores for them.
#[derive(Debug, Clone, Copy)]
pub struct RegionAdjuster<'a> {
    table: &'a RegionTable,
}

impl<'a> RegionAdjuster<'a> {
    pub fn new(table: &'a RegionTable) -> Self {
        Self { table }
    }

    pub fn ranges(&self, region: &str) -> Result<AdjustmentRange, ScoreError> {
        self.table
            .get(region)
            .map(AdjustmentRange::for_region)
            .ok_or_else(|| ScoreError::InvalidRegion(region.to_string()))
    }

    pub fn adjust(&self, raw_score: f64, region: &str) -> Result<f64, ScoreError> {
        Ok(self.ranges(region)?.apply(raw_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::builtin_table;

    fn ctx(health_index: f64) -> RegionContext {
        RegionContext::new(health_index, 50.0, 6.0, 100.0, 50.0)
    }

    #[test]
    fn test_ranges_for_kerala() {
        let range = AdjustmentRange::for_region(&ctx(82.2));
        assert!((range.min_range - 62.2).abs() < 1e-9);
        assert_eq!(range.max_range, 100.0);
        assert!((range.factor - 0.822).abs() < 1e-12);
    }

    #[test]
    fn test_min_range_floor() {
        let range = AdjustmentRange::for_region(&ctx(50.0));
        assert!((range.min_range - 40.0).abs() < 1e-9);
        assert!((range.max_range - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_raw_score_in_healthy_region() {
        let adjusted = adjust_for(100.0, &ctx(82.2));
        assert!((adjusted - 82.2).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_bounds() {
        // Raw below the window goes negative before clamping
        assert_eq!(adjust_for(0.0, &ctx(82.2)), 0.0);
        // Raw far above the window overshoots before clamping
        assert_eq!(adjust_for(100.0, &ctx(45.0)), 100.0);
    }

    #[test]
    fn test_degenerate_window_uses_factor() {
        // Health index 20 -> window [40, 40]
        let range = AdjustmentRange::for_region(&ctx(20.0));
        assert_eq!(range.min_range, range.max_range);
        assert!((range.apply(75.0) - 20.0).abs() < 1e-9);
        assert!((range.apply(0.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_rises_with_health_index() {
        let mut previous = AdjustmentRange::for_region(&ctx(30.0));
        for index in [40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0] {
            let range = AdjustmentRange::for_region(&ctx(index));
            assert!(range.min_range >= previous.min_range);
            assert!(range.max_range >= previous.max_range);
            assert!(range.factor > previous.factor);
            previous = range;
        }
    }

    #[test]
    fn test_adjust_is_deterministic() {
        let table = builtin_table();
        let adjuster = RegionAdjuster::new(&table);
        let first = adjuster.adjust(73.0, "Karnataka").unwrap();
        let second = adjuster.adjust(73.0, "Karnataka").unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_unknown_region() {
        let table = builtin_table();
        let adjuster = RegionAdjuster::new(&table);
        let err = adjuster.adjust(50.0, "Atlantis").unwrap_err();
        assert_eq!(err, ScoreError::InvalidRegion("Atlantis".to_string()));
    }

    #[test]
    fn test_builtin_regions_stay_in_bounds() {
        let table = builtin_table();
        let adjuster = RegionAdjuster::new(&table);
        for name in table.names() {
            for raw in [0.0, 40.0, 50.0, 60.0, 70.0, 80.0, 100.0] {
                let adjusted = adjuster.adjust(raw, name).unwrap();
                assert!((0.0..=100.0).contains(&adjusted), "{name} {raw} -> {adjusted}");
            }
        }
    }
}

//! Rule-based base scores for the five health categories.
//!
//! Every function here is pure and returns a score in [0, 100] before any
//! regional adjustment is applied.

use serde::Serialize;
use std::fmt;

use crate::input::HealthInput;
use crate::region::RegionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BodyComposition,
    Cardiovascular,
    Metabolic,
    Lifestyle,
    Environmental,
}

impl Category {
    /// All categories in reporting order
    pub const ALL: [Category; 5] = [
        Category::BodyComposition,
        Category::Cardiovascular,
        Category::Metabolic,
        Category::Lifestyle,
        Category::Environmental,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BodyComposition => "Body Composition",
            Category::Cardiovascular => "Cardiovascular",
            Category::Metabolic => "Metabolic",
            Category::Lifestyle => "Lifestyle",
            Category::Environmental => "Environmental",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const METABOLIC_PENALTY: f64 = 20.0;

/// Body mass index from height in centimeters and weight in kilograms
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI bands: normal 100, overweight 70, obese 40, anything else 50.
///
/// Values falling between the published bands (e.g. 24.95) land in the
/// "anything else" bucket.
pub fn body_composition_base(bmi: f64) -> f64 {
    if (18.5..=24.9).contains(&bmi) {
        100.0
    } else if (25.0..=29.9).contains(&bmi) {
        70.0
    } else if bmi >= 30.0 {
        40.0
    } else {
        50.0
    }
}

/// First matching blood pressure tier wins.
pub fn cardiovascular_base(systolic: f64, diastolic: f64) -> f64 {
    if systolic <= 120.0 && diastolic <= 80.0 {
        100.0
    } else if systolic <= 130.0 && diastolic <= 85.0 {
        80.0
    } else if systolic <= 140.0 && diastolic <= 90.0 {
        60.0
    } else {
        40.0
    }
}

/// Blood panel values feeding the metabolic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetabolicPanel {
    pub sugar: f64,
    pub ldl: f64,
    pub hdl: f64,
    pub alt: f64,
    pub ast: f64,
}

impl From<&HealthInput> for MetabolicPanel {
    fn from(input: &HealthInput) -> Self {
        Self {
            sugar: input.sugar_level,
            ldl: input.cholesterol_ldl,
            hdl: input.cholesterol_hdl,
            alt: input.liver_enzyme_alt,
            ast: input.liver_enzyme_ast,
        }
    }
}

/// Start at 100 and subtract 20 per out-of-range marker.
pub fn metabolic_base(panel: &MetabolicPanel) -> f64 {
    let flags = [
        panel.sugar > 100.0,
        panel.ldl > 100.0,
        panel.hdl < 40.0,
        panel.alt > 40.0,
        panel.ast > 40.0,
    ];
    let penalties = flags.iter().filter(|&&flagged| flagged).count() as f64;
    (100.0 - penalties * METABOLIC_PENALTY).max(0.0)
}

pub fn lifestyle_base(sleep_hours: f64) -> f64 {
    if (7.0..=9.0).contains(&sleep_hours) {
        100.0
    } else if (6.0..7.0).contains(&sleep_hours) {
        70.0
    } else if sleep_hours > 9.0 {
        60.0
    } else {
        40.0
    }
}

/// Cumulative deductions for poor air, sparse healthcare and a low state
/// health index.
pub fn environmental_base(ctx: &RegionContext) -> f64 {
    let mut score = 100.0;

    if ctx.aqi > 50.0 {
        score -= 20.0;
    }
    if ctx.aqi > 100.0 {
        score -= 20.0;
    }
    if ctx.healthcare_density < 6.0 {
        score -= 15.0;
    }
    if ctx.healthcare_density < 5.0 {
        score -= 15.0;
    }
    if ctx.health_index < 70.0 {
        score -= 10.0;
    }
    if ctx.health_index < 60.0 {
        score -= 10.0;
    }

    f64::max(score, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(health_index: f64, aqi: f64, healthcare_density: f64) -> RegionContext {
        RegionContext::new(health_index, aqi, healthcare_density, 100.0, 50.0)
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(180.0, 81.0);
        assert!((bmi - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_lower_boundary_is_normal() {
        // 53.5 / 1.7^2 = 18.51
        let bmi = calculate_bmi(170.0, 53.5);
        assert!((bmi - 18.5).abs() < 0.05);
        assert_eq!(body_composition_base(bmi), 100.0);
    }

    #[test]
    fn test_body_composition_bands() {
        assert_eq!(body_composition_base(22.0), 100.0);
        assert_eq!(body_composition_base(24.9), 100.0);
        assert_eq!(body_composition_base(25.0), 70.0);
        assert_eq!(body_composition_base(29.9), 70.0);
        assert_eq!(body_composition_base(30.0), 40.0);
        assert_eq!(body_composition_base(42.0), 40.0);
        assert_eq!(body_composition_base(17.0), 50.0);
    }

    #[test]
    fn test_body_composition_gap_between_bands() {
        assert_eq!(body_composition_base(24.95), 50.0);
        assert_eq!(body_composition_base(29.95), 50.0);
    }

    #[test]
    fn test_cardiovascular_exact_boundary() {
        assert_eq!(cardiovascular_base(120.0, 80.0), 100.0);
        assert_eq!(cardiovascular_base(121.0, 80.0), 80.0);
    }

    #[test]
    fn test_cardiovascular_tiers() {
        assert_eq!(cardiovascular_base(130.0, 85.0), 80.0);
        assert_eq!(cardiovascular_base(118.0, 86.0), 60.0);
        assert_eq!(cardiovascular_base(140.0, 90.0), 60.0);
        assert_eq!(cardiovascular_base(141.0, 70.0), 40.0);
        assert_eq!(cardiovascular_base(110.0, 95.0), 40.0);
    }

    #[test]
    fn test_metabolic_all_penalties_floor_at_zero() {
        let panel = MetabolicPanel {
            sugar: 150.0,
            ldl: 150.0,
            hdl: 30.0,
            alt: 50.0,
            ast: 50.0,
        };
        assert_eq!(metabolic_base(&panel), 0.0);
    }

    #[test]
    fn test_metabolic_healthy_panel() {
        let panel = MetabolicPanel {
            sugar: 90.0,
            ldl: 100.0,
            hdl: 40.0,
            alt: 40.0,
            ast: 40.0,
        };
        assert_eq!(metabolic_base(&panel), 100.0);
    }

    #[test]
    fn test_metabolic_independent_penalties() {
        let panel = MetabolicPanel {
            sugar: 101.0,
            ldl: 90.0,
            hdl: 39.0,
            alt: 20.0,
            ast: 20.0,
        };
        assert_eq!(metabolic_base(&panel), 60.0);
    }

    #[test]
    fn test_metabolic_panel_from_input() {
        let input = HealthInput::default();
        let panel = MetabolicPanel::from(&input);
        assert_eq!(panel.sugar, 90.0);
        assert_eq!(panel.hdl, 50.0);
    }

    #[test]
    fn test_lifestyle_bands() {
        assert_eq!(lifestyle_base(7.0), 100.0);
        assert_eq!(lifestyle_base(9.0), 100.0);
        assert_eq!(lifestyle_base(6.0), 70.0);
        assert_eq!(lifestyle_base(6.9), 70.0);
        assert_eq!(lifestyle_base(9.5), 60.0);
        assert_eq!(lifestyle_base(5.9), 40.0);
        assert_eq!(lifestyle_base(0.0), 40.0);
    }

    #[test]
    fn test_environmental_best_case() {
        assert_eq!(environmental_base(&region(80.0, 40.0, 8.0)), 100.0);
    }

    #[test]
    fn test_environmental_worst_case() {
        // -40 air, -30 healthcare, -20 health index
        assert_eq!(environmental_base(&region(50.0, 150.0, 3.0)), 10.0);
    }

    #[test]
    fn test_environmental_aqi_monotonic() {
        let clean = environmental_base(&region(65.0, 40.0, 5.5));
        let polluted = environmental_base(&region(65.0, 120.0, 5.5));
        assert!(clean >= polluted);
        assert_eq!(clean - polluted, 40.0);
    }

    #[test]
    fn test_environmental_builtin_kerala() {
        // Kerala: AQI 45, density 8.5, index 82.2 -> no deductions
        let kerala = RegionContext::new(82.2, 45.0, 8.5, 850.0, 70.0);
        assert_eq!(environmental_base(&kerala), 100.0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::BodyComposition.to_string(), "Body Composition");
        assert_eq!(Category::ALL.len(), 5);
    }
}

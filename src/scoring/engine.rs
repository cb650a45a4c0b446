use serde::Serialize;
use std::sync::Arc;

use super::adjuster::{AdjustmentRange, RegionAdjuster};
use super::aggregate::{aggregate, weight, CategoryScores};
use super::categories::{
    body_composition_base, calculate_bmi, cardiovascular_base, environmental_base, lifestyle_base,
    metabolic_base, Category, MetabolicPanel,
};
use super::error::ScoreError;
use super::recommendations::generate_recommendations;
use super::validation::validate_input;
use crate::input::HealthInput;
use crate::region::{builtin_table, RegionContext, RegionTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryContribution {
    pub category: Category,
    pub base: f64,     // Rule score before regional adjustment
    pub adjusted: f64, // Score after regional adjustment
    pub weight: f64,   // Share of the overall score
    pub weighted: f64, // adjusted * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub bmi: f64,
    pub adjustment: AdjustmentRange,
    pub categories: Vec<CategoryContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScore {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Computes health scores against an immutable region table.
///
/// Cloning is cheap and the engine holds no mutable state, so a single
/// instance can score inputs from many threads at once.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    table: Arc<RegionTable>,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(builtin_table())
    }
}

impl ScoreEngine {
    pub fn new(table: Arc<RegionTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RegionTable {
        &self.table
    }

    pub fn adjuster(&self) -> RegionAdjuster<'_> {
        RegionAdjuster::new(&self.table)
    }

    /// Score one input.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if any numeric field is out of its domain
    /// - `InvalidRegion` if the input's region is not in the table
    pub fn compute_score(&self, input: &HealthInput) -> Result<HealthScore, ScoreError> {
        validate_input(input).map_err(ScoreError::InvalidInput)?;

        let ctx = self
            .table
            .get(&input.region)
            .ok_or_else(|| ScoreError::InvalidRegion(input.region.clone()))?;
        let adjustment = AdjustmentRange::for_region(ctx);

        tracing::debug!(
            region = %input.region,
            min_range = adjustment.min_range,
            max_range = adjustment.max_range,
            factor = adjustment.factor,
            "region adjustment"
        );

        let bmi = calculate_bmi(input.height, input.weight);
        let panel = MetabolicPanel::from(input);

        let mut contributions = Vec::with_capacity(Category::ALL.len());
        let category_scores = CategoryScores::from_fn(|category| {
            let base = base_score(category, input, bmi, &panel, ctx);
            let adjusted = adjustment.apply(base);
            let share = weight(category);

            tracing::debug!(category = %category, base, adjusted, "category scored");

            contributions.push(CategoryContribution {
                category,
                base,
                adjusted,
                weight: share,
                weighted: adjusted * share,
            });
            adjusted
        });

        let overall_score = aggregate(&category_scores);
        let recommendations = generate_recommendations(input, &category_scores, ctx);

        tracing::debug!(
            overall_score,
            recommendations = recommendations.len(),
            "health score computed"
        );

        Ok(HealthScore {
            overall_score,
            category_scores,
            recommendations,
            breakdown: ScoreBreakdown {
                bmi,
                adjustment,
                categories: contributions,
            },
        })
    }
}

fn base_score(
    category: Category,
    input: &HealthInput,
    bmi: f64,
    panel: &MetabolicPanel,
    ctx: &RegionContext,
) -> f64 {
    match category {
        Category::BodyComposition => body_composition_base(bmi),
        Category::Cardiovascular => {
            cardiovascular_base(input.blood_pressure_systolic, input.blood_pressure_diastolic)
        }
        Category::Metabolic => metabolic_base(panel),
        Category::Lifestyle => lifestyle_base(input.sleep_duration),
        Category::Environmental => environmental_base(ctx),
    }
}

/// Score an input against the built-in Indian state table.
pub fn calculate_health_score(input: &HealthInput) -> Result<HealthScore, ScoreError> {
    ScoreEngine::default().compute_score(input)
}

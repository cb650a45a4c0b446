pub mod adjuster;
pub mod aggregate;
pub mod categories;
pub mod engine;
pub mod error;
pub mod recommendations;
pub mod validation;

pub use adjuster::{adjust_for, AdjustmentRange, RegionAdjuster};
pub use aggregate::{aggregate, round2, weight, CategoryScores};
pub use categories::{calculate_bmi, Category, MetabolicPanel};
pub use engine::{
    calculate_health_score, CategoryContribution, HealthScore, ScoreBreakdown, ScoreEngine,
};
pub use error::ScoreError;
pub use recommendations::generate_recommendations;
pub use validation::validate_input;

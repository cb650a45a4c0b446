use serde::Serialize;

use super::categories::Category;

/// Adjusted scores for every category, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScores {
    pub body_composition: f64,
    pub cardiovascular: f64,
    pub metabolic: f64,
    pub lifestyle: f64,
    pub environmental: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::BodyComposition => self.body_composition,
            Category::Cardiovascular => self.cardiovascular,
            Category::Metabolic => self.metabolic,
            Category::Lifestyle => self.lifestyle,
            Category::Environmental => self.environmental,
        }
    }

    /// Build from a per-category score function, evaluated in `Category::ALL` order.
    pub fn from_fn<F>(mut score: F) -> Self
    where
        F: FnMut(Category) -> f64,
    {
        Self {
            body_composition: score(Category::BodyComposition),
            cardiovascular: score(Category::Cardiovascular),
            metabolic: score(Category::Metabolic),
            lifestyle: score(Category::Lifestyle),
            environmental: score(Category::Environmental),
        }
    }
}

/// Fixed share of the overall score carried by a category. Weights sum to 1.0.
pub fn weight(category: Category) -> f64 {
    match category {
        Category::BodyComposition => 0.20,
        Category::Cardiovascular => 0.25,
        Category::Metabolic => 0.25,
        Category::Lifestyle => 0.15,
        Category::Environmental => 0.15,
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted overall score, rounded to two decimal places.
pub fn aggregate(scores: &CategoryScores) -> f64 {
    let total: f64 = Category::ALL
        .iter()
        .map(|&category| scores.get(category) * weight(category))
        .sum();
    round2(total)
}

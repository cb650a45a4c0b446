use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::region::RegionTable;
use crate::scoring::{AdjustmentRange, Category, HealthScore};

const MAX_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;

/// Width of the label column ("Body Composition" plus padding)
const LABEL_WIDTH: usize = 18;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Traffic-light band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

fn paint(text: &str, band: ScoreBand) -> String {
    match band {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}

/// Bar width that fits the terminal, or the maximum when piped
fn bar_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize)
            .saturating_sub(LABEL_WIDTH + 12)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => MAX_BAR_WIDTH,
    }
}

/// Render a score as a fixed-width bar of filled and empty cells
pub fn format_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score with one decimal place
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Human-readable report: overall score, category bars, recommendations.
pub fn format_report(score: &HealthScore, use_colors: bool) -> String {
    let width = bar_width();
    let mut lines = Vec::new();

    let overall = format!("Overall Health Score: {:.2}", score.overall_score);
    if use_colors {
        lines.push(paint(&overall, ScoreBand::of(score.overall_score)).bold().to_string());
    } else {
        lines.push(overall);
    }
    lines.push(format!("BMI: {:.1}", score.breakdown.bmi));
    lines.push(String::new());
    lines.push("Category Scores".to_string());

    for category in Category::ALL {
        let value = score.category_scores.get(category);
        let label = format!("{:<width$}", category.label(), width = LABEL_WIDTH);
        let bar = format_bar(value, width);
        let number = format!("{:>5}%", format_score(value));
        if use_colors {
            let band = ScoreBand::of(value);
            lines.push(format!("  {}{} {}", label, paint(&bar, band), paint(&number, band)));
        } else {
            lines.push(format!("  {}{} {}", label, bar, number));
        }
    }

    lines.push(String::new());
    lines.push("Recommendations".to_string());
    if score.recommendations.is_empty() {
        lines.push("  No specific recommendations. Keep it up!".to_string());
    } else {
        for recommendation in &score.recommendations {
            let bullet = if use_colors {
                "•".blue().to_string()
            } else {
                "•".to_string()
            };
            lines.push(format!("  {} {}", bullet, recommendation));
        }
    }

    lines.join("\n")
}

/// Verbose per-category breakdown: base -> adjusted (weight, contribution)
pub fn format_breakdown(score: &HealthScore) -> String {
    let range = &score.breakdown.adjustment;
    let mut lines = vec![format!(
        "Region window: {:.1}-{:.1}, factor {:.3}",
        range.min_range, range.max_range, range.factor
    )];
    for c in &score.breakdown.categories {
        lines.push(format!(
            "  {:<width$}base {:>5.1} -> {:>5.1}  (x{:.2} = {:.2})",
            c.category.label(),
            c.base,
            c.adjusted,
            c.weight,
            c.weighted,
            width = LABEL_WIDTH
        ));
    }
    lines.join("\n")
}

/// Pretty JSON for machine consumption
pub fn format_json(score: &HealthScore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(score)
}

/// Tab-separated values for scripting
/// Columns: overall, then the five categories in reporting order (no headers, no colors)
pub fn format_tsv(score: &HealthScore) -> String {
    let mut columns = vec![format!("{:.2}", score.overall_score)];
    columns.extend(
        Category::ALL
            .iter()
            .map(|&c| format!("{:.2}", score.category_scores.get(c))),
    );
    columns.join("\t")
}

/// Region listing with metrics and adjustment window
pub fn format_regions(table: &RegionTable, use_colors: bool) -> String {
    if table.is_empty() {
        return "No regions loaded.".to_string();
    }

    let name_width = table.names().map(str::len).max().unwrap_or(0).max(6);
    let header = format!(
        "{:<name_width$}  {:>6}  {:>5}  {:>7}  {:>8}  {:>8}  {:>11}",
        "Region", "Health", "AQI", "Density", "Altitude", "Humidity", "Window",
    );

    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for (name, ctx) in table.iter() {
        let range = AdjustmentRange::for_region(ctx);
        let window = format!("{:.0}-{:.0}", range.min_range, range.max_range);
        let health = format!("{:>6.1}", ctx.health_index);
        let health = if use_colors {
            paint(&health, ScoreBand::of(ctx.health_index))
        } else {
            health
        };
        lines.push(format!(
            "{:<name_width$}  {}  {:>5.0}  {:>7.1}  {:>8.0}  {:>7.0}%  {:>11}",
            name, health, ctx.aqi, ctx.healthcare_density, ctx.altitude, ctx.humidity, window,
        ));
    }

    lines.join("\n")
}

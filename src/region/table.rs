use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::RegionContext;

/// Built-in state metrics: (name, health index, AQI, healthcare density, altitude, humidity)
const INDIAN_STATES: [(&str, RegionContext); 20] = [
    ("Kerala", RegionContext::new(82.2, 45.0, 8.5, 850.0, 70.0)),
    ("Tamil Nadu", RegionContext::new(72.8, 55.0, 7.2, 160.0, 65.0)),
    ("Maharashtra", RegionContext::new(69.1, 75.0, 6.8, 550.0, 55.0)),
    ("Gujarat", RegionContext::new(65.7, 85.0, 6.2, 180.0, 45.0)),
    ("Punjab", RegionContext::new(63.8, 95.0, 5.9, 250.0, 40.0)),
    ("Karnataka", RegionContext::new(61.4, 65.0, 6.4, 920.0, 60.0)),
    ("Telangana", RegionContext::new(59.8, 70.0, 5.8, 505.0, 50.0)),
    ("Andhra Pradesh", RegionContext::new(58.2, 60.0, 5.5, 150.0, 65.0)),
    ("West Bengal", RegionContext::new(56.9, 90.0, 5.2, 15.0, 75.0)),
    ("Rajasthan", RegionContext::new(54.3, 100.0, 4.8, 430.0, 35.0)),
    ("Madhya Pradesh", RegionContext::new(52.1, 88.0, 4.5, 485.0, 45.0)),
    ("Uttar Pradesh", RegionContext::new(51.2, 98.0, 4.2, 200.0, 50.0)),
    ("Bihar", RegionContext::new(49.8, 92.0, 3.8, 60.0, 65.0)),
    ("Odisha", RegionContext::new(53.5, 80.0, 4.6, 150.0, 70.0)),
    ("Assam", RegionContext::new(55.7, 65.0, 4.9, 90.0, 80.0)),
    ("Himachal Pradesh", RegionContext::new(64.5, 45.0, 5.5, 2200.0, 55.0)),
    ("Uttarakhand", RegionContext::new(61.2, 50.0, 5.2, 1850.0, 60.0)),
    ("Jharkhand", RegionContext::new(50.4, 85.0, 4.1, 320.0, 55.0)),
    ("Chhattisgarh", RegionContext::new(51.8, 82.0, 4.3, 315.0, 50.0)),
    ("Goa", RegionContext::new(70.5, 40.0, 7.5, 50.0, 75.0)),
];

static BUILTIN: OnceLock<Arc<RegionTable>> = OnceLock::new();

/// Read-only mapping from region identifier to its context metrics.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RegionTable {
    regions: BTreeMap<String, RegionContext>,
}

impl RegionTable {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RegionContext)>,
        S: Into<String>,
    {
        Self {
            regions: entries
                .into_iter()
                .map(|(name, ctx)| (name.into(), ctx))
                .collect(),
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionContext> {
        self.regions.get(region)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region identifiers in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionContext)> {
        self.regions.iter().map(|(name, ctx)| (name.as_str(), ctx))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// The built-in Indian state table, created on first use and shared thereafter.
pub fn builtin_table() -> Arc<RegionTable> {
    BUILTIN
        .get_or_init(|| Arc::new(RegionTable::from_entries(INDIAN_STATES)))
        .clone()
}

/// Validate every entry of a region table.
/// Returns all validation errors at once (not just the first).
pub fn validate_table(table: &RegionTable) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if table.is_empty() {
        errors.push("regions: table must contain at least one region".to_string());
    }

    for (name, ctx) in table.iter() {
        if name.trim().is_empty() {
            errors.push("regions: region name must not be blank".to_string());
        }

        let percentages = [("health_index", ctx.health_index), ("humidity", ctx.humidity)];
        for (field, value) in percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                errors.push(format!(
                    "regions.{}.{}: must be between 0 and 100, got {}",
                    name, field, value
                ));
            }
        }

        let non_negative = [
            ("aqi", ctx.aqi),
            ("healthcare_density", ctx.healthcare_density),
            ("altitude", ctx.altitude),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "regions.{}.{}: must be non-negative, got {}",
                    name, field, value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Load a custom region table from a YAML file and validate it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML cannot be parsed,
/// or any entry is out of range.
pub fn load_table(path: &Path) -> Result<RegionTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read region table at {}", path.display()))?;

    let table: RegionTable = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse region table: invalid YAML in {}", path.display()))?;

    if let Err(errors) = validate_table(&table) {
        anyhow::bail!(
            "Invalid region table {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        );
    }

    tracing::debug!(path = %path.display(), regions = table.len(), "loaded region table");
    Ok(table)
}

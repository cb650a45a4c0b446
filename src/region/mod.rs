pub mod table;

pub use table::{builtin_table, load_table, validate_table, RegionTable};

use serde::{Deserialize, Serialize};

/// Context metrics for one region (an Indian state or territory).
///
/// Example YAML entry:
/// ```yaml
/// Kerala:
///   health_index: 82.2
///   aqi: 45
///   healthcare_density: 8.5
///   altitude: 850
///   humidity: 70
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegionContext {
    /// Composite state health index, 0-100
    pub health_index: f64,

    /// Air quality index, higher is worse
    pub aqi: f64,

    /// Healthcare facilities per capita proxy
    pub healthcare_density: f64,

    /// Mean altitude in meters
    pub altitude: f64,

    /// Mean relative humidity in percent, 0-100
    pub humidity: f64,
}

impl RegionContext {
    pub const fn new(
        health_index: f64,
        aqi: f64,
        healthcare_density: f64,
        altitude: f64,
        humidity: f64,
    ) -> Self {
        Self {
            health_index,
            aqi,
            healthcare_density,
            altitude,
            humidity,
        }
    }
}

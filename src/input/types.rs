use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vision {
    Normal,
    Corrected,
    Impaired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hearing {
    Normal,
    Partial,
    Impaired,
}

/// Self-reported biometrics for one person.
///
/// Example YAML:
/// ```yaml
/// age: 30
/// gender: male
/// height: 170
/// weight: 70
/// blood_group: "O+"
/// blood_pressure_systolic: 120
/// blood_pressure_diastolic: 80
/// sugar_level: 90
/// cholesterol_ldl: 100
/// cholesterol_hdl: 50
/// liver_enzyme_alt: 30
/// liver_enzyme_ast: 30
/// sleep_duration: 7
/// vision: normal
/// hearing: normal
/// region: Kerala
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HealthInput {
    pub age: u32,
    pub gender: Gender,

    /// Height in centimeters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    pub blood_group: BloodGroup,

    /// Blood pressure in mmHg
    pub blood_pressure_systolic: f64,
    pub blood_pressure_diastolic: f64,

    /// Fasting sugar level in mg/dL
    pub sugar_level: f64,

    /// Cholesterol in mg/dL
    pub cholesterol_ldl: f64,
    pub cholesterol_hdl: f64,

    /// Liver enzymes in U/L
    pub liver_enzyme_alt: f64,
    pub liver_enzyme_ast: f64,

    /// Average nightly sleep in hours
    pub sleep_duration: f64,

    pub vision: Vision,
    pub hearing: Hearing,

    /// Region identifier, must be present in the active region table
    pub region: String,
}

impl Default for HealthInput {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            height: 170.0,
            weight: 70.0,
            blood_group: BloodGroup::OPositive,
            blood_pressure_systolic: 120.0,
            blood_pressure_diastolic: 80.0,
            sugar_level: 90.0,
            cholesterol_ldl: 100.0,
            cholesterol_hdl: 50.0,
            liver_enzyme_alt: 30.0,
            liver_enzyme_ast: 30.0,
            sleep_duration: 7.0,
            vision: Vision::Normal,
            hearing: Hearing::Normal,
            region: "Kerala".to_string(),
        }
    }
}

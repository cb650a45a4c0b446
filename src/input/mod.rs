pub mod init;
mod types;

pub use init::{collect_input, run_init_wizard, save_input};
pub use types::{BloodGroup, Gender, HealthInput, Hearing, Vision};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a health input record from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The input file does not exist or cannot be read
/// - The YAML cannot be parsed into a complete record
pub fn load_input(path: &Path) -> Result<HealthInput> {
    if !path.exists() {
        anyhow::bail!(
            "Input file not found at {}. Create one with `health-score init`",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file at {}", path.display()))?;

    let input: HealthInput = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse input: invalid YAML in {}", path.display()))?;

    Ok(input)
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Tsv,
}

/// Optional settings file.
///
/// Example YAML:
/// ```yaml
/// regions_file: ~/health/regions.yaml
/// log_level: info
/// format: json
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Custom region table replacing the built-in Indian state table
    #[serde(default)]
    pub regions_file: Option<PathBuf>,

    /// Log filter used when neither RUST_LOG nor --verbose is set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Default output format for `score`
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

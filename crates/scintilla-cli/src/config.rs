//! TOML configuration deserialisation for simulation jobs.

use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Detector dimension overrides (metres) and material choices. Every field
/// is optional; the builder defaults apply otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct DetectorConfig {
    pub target_length_m: Option<f64>,
    pub target_radius_m: Option<f64>,
    pub inset_radius_m: Option<f64>,
    pub shield_thickness_m: Option<f64>,
    pub detector_length_m: Option<f64>,
    pub detector_thickness_m: Option<f64>,
    pub detector_radius_m: Option<f64>,
    /// Material name resolved against the catalog (e.g. "Argon", "Water").
    pub target_material: Option<String>,
    pub detector_material: Option<String>,
}

/// Primary source parameters.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Number of events to sample (default: 1000).
    #[serde(default = "default_events")]
    pub events: usize,
    /// Seed for the photon gun's random stream (default: 1).
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { events: default_events(), seed: default_seed() }
    }
}

fn default_events() -> usize {
    1000
}
fn default_seed() -> u64 {
    1
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save sampled vertices as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_vertices: bool,
    /// Whether to also save vertices as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_vertices: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

//! Command-line configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Context;
use suspension_geometry::BuildConfig;

/// Runtime configuration shared by both binaries.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the per-sheet JSON documents are written to.
    pub results_dir: PathBuf,
    /// Where the STEP model is written.
    pub step_output: PathBuf,
    /// Optional JSON file overriding [`BuildConfig`] defaults.
    pub build_config: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            results_dir: std::env::var("SUSP_RESULTS_DIR")
                .unwrap_or_else(|_| "results".into())
                .into(),
            step_output: std::env::var("SUSP_STEP_OUTPUT")
                .unwrap_or_else(|_| "Car_Assembly.step".into())
                .into(),
            build_config: std::env::var("SUSP_BUILD_CONFIG")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// The geometry settings: defaults, or the configured file.
    pub fn load_build_config(&self) -> anyhow::Result<BuildConfig> {
        let Some(path) = &self.build_config else {
            return Ok(BuildConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading build config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing build config {}", path.display()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

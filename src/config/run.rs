use crate::detector::{EdgeParams, Operation};
use crate::image::BorderMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one invocation of the binary needs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub operation: Operation,
    #[serde(default)]
    pub border: BorderMode,
    /// Where to write the JSON run report, if anywhere
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        operation: Operation,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            operation,
            border: BorderMode::default(),
            report_json: None,
        }
    }

    pub fn edge_params(&self) -> EdgeParams {
        EdgeParams {
            border: self.border,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Parse a run configuration from JSON text.
pub fn parse_config(json: &str) -> Result<RunConfig, serde_json::Error> {
    serde_json::from_str(json)
}

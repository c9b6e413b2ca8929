use crate::detector::params::FitParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    pub datasets: Vec<DatasetConfig>,
    #[serde(default)]
    pub params: FitParams,
    #[serde(default)]
    pub output: OutputConfig,
}

/// One folder of images sharing the same expected answer.
#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
    /// Name printed in the dataset header; defaults to the folder name.
    #[serde(default)]
    pub label: Option<String>,
    /// Expected verdict (`true` = fits) for accuracy reporting.
    #[serde(default)]
    pub expected: Option<bool>,
}

impl DatasetConfig {
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the per-image JSON report, if anywhere.
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BatchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

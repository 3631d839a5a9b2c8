//! Configuration for both tools. The merger's removable-column list is an
//! explicit config value, optionally loaded from JSON, so callers decide
//! what gets dropped instead of editing a constant.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the content collector.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Directory whose tree is walked.
    pub base_dir: PathBuf,
    /// Only files whose name ends with this suffix are collected.
    pub extension: String,
    /// Name of the aggregate file, written directly under `base_dir`.
    pub output_name: String,
}

impl CollectorConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            extension: ".cs".to_string(),
            output_name: "all_contents.txt".to_string(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_name)
    }
}

/// Settings for the telemetry merger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Per-run log file name inside each run directory.
    pub log_file_name: String,
    /// Column the merged rows are sorted by (ascending).
    pub sort_column: String,
    /// Time/index columns removed after sorting.
    pub start_column: String,
    pub episode_column: String,
    /// Extra columns to drop from the merged output. A listed column that is
    /// absent from the data produces one warning, not an error.
    pub remove_columns: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            log_file_name: "eco-log.csv".to_string(),
            sort_column: "endTime".to_string(),
            start_column: "startTime".to_string(),
            episode_column: "episode".to_string(),
            remove_columns: vec![
                "totalPredatorsSpawned".to_string(),
                "maxPredatorGeneration".to_string(),
                "animalKilled".to_string(),
                "diedFromHealthOver".to_string(),
            ],
        }
    }
}

impl MergeConfig {
    /// Load from a JSON file. Absent keys fall back to the defaults above.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: MergeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Name of the merged output file for a group prefix.
    pub fn output_name(&self, prefix: &str) -> String {
        format!("merged-eco-log_{prefix}.csv")
    }
}

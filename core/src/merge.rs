//! Group merge: load every run log in a group, concatenate, sort by end
//! time, renumber episodes, drop the configured columns, and write the
//! merged CSV next to the run directories.

use crate::config::MergeConfig;
use crate::discovery::RunGroup;
use crate::error::{TelemetryError, TelemetryResult};
use crate::table::LogTable;
use log::warn;
use std::path::{Path, PathBuf};

/// Outcome of a successful merge, for the caller's summary output.
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub episodes: usize,
    pub runs_loaded: usize,
    /// Remaining metric columns, before the fresh episode column is added.
    pub columns: Vec<String>,
    pub output_path: PathBuf,
}

/// Merge one group's run logs into `merged-eco-log_<prefix>.csv` inside
/// `env_dir`. A run with no log file is skipped with a warning; zero
/// loadable logs or a missing sort column abort with no file written.
pub fn merge_group(
    env_dir: &Path,
    group: &RunGroup,
    config: &MergeConfig,
) -> TelemetryResult<MergeReport> {
    let mut merged: Option<LogTable> = None;
    let mut runs_loaded = 0usize;

    for run in &group.runs {
        let log_path = run.join(&config.log_file_name);
        if !log_path.is_file() {
            let run_name = run.file_name().map(|n| n.to_string_lossy().into_owned());
            warn!(
                "missing {}/{} - skipping",
                run_name.unwrap_or_default(),
                config.log_file_name
            );
            continue;
        }
        let table = LogTable::from_csv(&log_path)?;
        runs_loaded += 1;
        match merged.as_mut() {
            Some(m) => m.append(table),
            None => merged = Some(table),
        }
    }

    let Some(mut merged) = merged else {
        return Err(TelemetryError::NoRunData {
            prefix: group.prefix.clone(),
        });
    };

    if !merged.sort_by_column(&config.sort_column) {
        return Err(TelemetryError::MissingSortColumn {
            column: config.sort_column.clone(),
        });
    }

    // Old episode index and both time columns go silently when present.
    merged.remove_column(&config.episode_column);
    merged.remove_column(&config.start_column);
    merged.remove_column(&config.sort_column);

    for column in &config.remove_columns {
        if !merged.remove_column(column) {
            warn!("column '{column}' not found in merged data.");
        }
    }

    let columns = merged.columns.clone();

    let episodes = merged.row_count();
    let numbering = (1..=episodes).map(|i| i.to_string()).collect();
    merged.insert_column_front(&config.episode_column, numbering);

    let output_path = env_dir.join(config.output_name(&group.prefix));
    merged.write_csv(&output_path)?;

    Ok(MergeReport {
        episodes,
        runs_loaded,
        columns,
        output_path,
    })
}

//! Content collector: walks a directory tree and appends every matching
//! source file into one aggregate text file, one header + body section per
//! file. A file that cannot be read never aborts the walk.

use crate::config::CollectorConfig;
use crate::error::TelemetryResult;
use log::warn;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of one collection pass.
#[derive(Debug, Clone)]
pub struct CollectReport {
    pub files_collected: usize,
    pub output_path: PathBuf,
}

/// Probe whether a file holds valid UTF-8 text.
///
/// Ok(Some(text)) - readable text, Ok(None) - bytes are not UTF-8,
/// Err - the read itself failed.
pub fn probe_text(path: &Path) -> std::io::Result<Option<String>> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes).ok())
}

/// Walk `base_dir` and write one section per file matching the configured
/// extension into the aggregate output file (overwritten if present). The
/// output file itself is never collected. Prints one progress line per file.
pub fn collect_contents(config: &CollectorConfig) -> TelemetryResult<CollectReport> {
    let output_path = config.output_path();
    let mut out = BufWriter::new(File::create(&output_path)?);
    let mut files_collected = 0usize;

    for entry in WalkDir::new(&config.base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path == output_path {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&config.extension) {
            continue;
        }

        files_collected += 1;
        println!("{}", path.display());

        let relative = path.strip_prefix(&config.base_dir).unwrap_or(path);
        write!(out, "\n\n--- FILE: {} ---\n", relative.display())?;
        match probe_text(path) {
            Ok(Some(text)) => out.write_all(text.as_bytes())?,
            Ok(None) => writeln!(out, "[Binary file skipped]")?,
            Err(e) => write!(out, "\n[Error reading file: {e}]\n")?,
        }
    }

    out.flush()?;
    Ok(CollectReport {
        files_collected,
        output_path,
    })
}

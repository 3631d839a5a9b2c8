//! Telemetry tree discovery. Environments are the direct subdirectories of
//! the telemetry root; each run directory inside an environment is named
//! `<prefix>_<timestamp>` and groups with every sibling sharing the prefix.
//! The timestamp token is opaque: grouping splits on the final underscore
//! and never parses the suffix as a date.

use crate::error::{TelemetryError, TelemetryResult};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Run directories sharing one name prefix, merged together.
#[derive(Debug, Clone, PartialEq)]
pub struct RunGroup {
    pub prefix: String,
    pub runs: Vec<PathBuf>,
}

/// One environment directory and its name-sorted groups.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvDir {
    pub name: String,
    pub path: PathBuf,
    pub groups: Vec<RunGroup>,
}

/// List the telemetry tree. Fails before any prompt if the root is missing.
/// Environments, prefixes, and runs within a group all sort by name.
pub fn discover_environments(telemetry_root: &Path) -> TelemetryResult<Vec<EnvDir>> {
    if !telemetry_root.is_dir() {
        return Err(TelemetryError::MissingTelemetryRoot(
            telemetry_root.to_path_buf(),
        ));
    }

    let mut envs = Vec::new();
    for path in list_dirs(telemetry_root)? {
        let name = dir_name(&path);
        let groups = group_by_prefix(list_dirs(&path)?);
        envs.push(EnvDir { name, path, groups });
    }
    Ok(envs)
}

/// Direct subdirectories of `path`, sorted by name.
fn list_dirs(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort_by_key(|p| dir_name(p));
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Group runs by the substring before the final underscore. A name with no
/// underscore is its own prefix.
fn group_by_prefix(runs: Vec<PathBuf>) -> Vec<RunGroup> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for run in runs {
        let name = dir_name(&run);
        let prefix = name
            .rsplit_once('_')
            .map(|(head, _)| head.to_string())
            .unwrap_or(name);
        groups.entry(prefix).or_default().push(run);
    }
    groups
        .into_iter()
        .map(|(prefix, runs)| RunGroup { prefix, runs })
        .collect()
}

/// Two-level enumerated listing shown before the selection prompt.
/// Indices are 1-based and match the `E.G` selector format.
pub fn render_hierarchy(envs: &[EnvDir]) -> String {
    let mut out = String::from("Available environments and timestamp-groups:\n\n");
    for (ei, env) in envs.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", ei + 1, env.name);
        if env.groups.is_empty() {
            out.push_str("    (no runs)\n\n");
            continue;
        }
        for (gi, group) in env.groups.iter().enumerate() {
            let _ = writeln!(
                out,
                "    [{}.{}] {} ({} runs)",
                ei + 1,
                gi + 1,
                group.prefix,
                group.runs.len()
            );
        }
        out.push('\n');
    }
    out
}

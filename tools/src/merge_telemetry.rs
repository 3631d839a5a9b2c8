//! merge-telemetry: pick one environment/group of simulation runs and merge
//! their per-run logs into a single sorted, renumbered CSV.
//!
//! Usage:
//!   merge-telemetry
//!   merge-telemetry --root /path/to/project --config merge-config.json
//!
//! The telemetry tree is expected at `<root>/Assets/Telemetry`. One prompt
//! (`E.G`, e.g. `2.1` for env 2, group 1) picks the merge target; blank
//! input exits cleanly.

use anyhow::Result;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use telemetry_core::discovery::{discover_environments, render_hierarchy};
use telemetry_core::merge::merge_group;
use telemetry_core::selection::{parse_selection, resolve_selection};
use telemetry_core::{MergeConfig, TelemetryError};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let root = PathBuf::from(str_arg(&args, "--root").unwrap_or("."));
    let telemetry = root.join("Assets").join("Telemetry");

    let config = match str_arg(&args, "--config") {
        Some(path) => MergeConfig::load(Path::new(path))?,
        None => MergeConfig::default(),
    };

    let envs = match discover_environments(&telemetry) {
        Ok(envs) => envs,
        Err(e @ TelemetryError::MissingTelemetryRoot(_)) => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    print!("{}", render_hierarchy(&envs));

    print!("Enter selection (E.G), or blank to exit: ");
    io::stdout().flush()?;
    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;
    let choice = choice.trim();
    if choice.is_empty() {
        println!("Aborted.");
        return Ok(());
    }

    let (env, group) = match parse_selection(choice).and_then(|s| resolve_selection(&envs, s)) {
        Ok(target) => target,
        Err(e @ TelemetryError::InvalidSelection { .. }) => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match merge_group(&env.path, group, &config) {
        Ok(report) => {
            println!();
            println!("Columns in merged data:");
            println!("{}", report.columns.join(", "));
            println!();
            println!(
                "merged {} episodes from {} runs -> {}",
                report.episodes,
                report.runs_loaded,
                report.output_path.display()
            );
        }
        // Merge-stage aborts print their message without failing the process.
        Err(e @ TelemetryError::NoRunData { .. })
        | Err(e @ TelemetryError::MissingSortColumn { .. }) => {
            println!("{e}");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

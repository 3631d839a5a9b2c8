//! collect-contents: dump every matching source file under a directory into
//! one aggregate text file for inspection or sharing.
//!
//! Usage:
//!   collect-contents
//!   collect-contents --dir Assets/Scripts --ext .cs --output all_contents.txt

use anyhow::Result;
use std::env;
use telemetry_core::collector::collect_contents;
use telemetry_core::CollectorConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let mut config = CollectorConfig::new(str_arg(&args, "--dir").unwrap_or("."));
    if let Some(ext) = str_arg(&args, "--ext") {
        config.extension = ext.to_string();
    }
    if let Some(output) = str_arg(&args, "--output") {
        config.output_name = output.to_string();
    }

    let report = collect_contents(&config)?;
    println!("Total files collected : {}", report.files_collected);
    println!(
        "All readable contents saved to {}",
        report.output_path.display()
    );
    Ok(())
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

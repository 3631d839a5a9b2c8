//! telemetry-core: library behind the ecosystem telemetry tools.
//!
//! Two workflows live here. The content collector walks a source tree and
//! dumps every matching file into one aggregate text file. The telemetry
//! merger discovers timestamped run directories, concatenates their per-run
//! CSV logs, and writes a merged, renumbered log per environment group.

pub mod collector;
pub mod config;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod selection;
pub mod table;

pub use config::{CollectorConfig, MergeConfig};
pub use error::{TelemetryError, TelemetryResult};

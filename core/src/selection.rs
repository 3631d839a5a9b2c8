//! The `E.G` selector: environment index, a dot, group index, both 1-based.
//! Anything malformed or out of range is an invalid selection; blank input
//! is handled by the caller as a clean abort before parsing.

use crate::discovery::{EnvDir, RunGroup};
use crate::error::{TelemetryError, TelemetryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub env: usize,
    pub group: usize,
}

/// Parse `E.G` input, e.g. `2.1` for environment 2, group 1.
pub fn parse_selection(input: &str) -> TelemetryResult<Selection> {
    let invalid = || TelemetryError::InvalidSelection {
        input: input.to_string(),
    };

    let (env_str, group_str) = input.trim().split_once('.').ok_or_else(invalid)?;
    let env: usize = env_str.parse().map_err(|_| invalid())?;
    let group: usize = group_str.parse().map_err(|_| invalid())?;
    if env == 0 || group == 0 {
        return Err(invalid());
    }
    Ok(Selection { env, group })
}

/// Map a parsed selection onto the discovered hierarchy.
pub fn resolve_selection<'a>(
    envs: &'a [EnvDir],
    selection: Selection,
) -> TelemetryResult<(&'a EnvDir, &'a RunGroup)> {
    let invalid = || TelemetryError::InvalidSelection {
        input: format!("{}.{}", selection.env, selection.group),
    };

    let env = envs.get(selection.env - 1).ok_or_else(invalid)?;
    let group = env.groups.get(selection.group - 1).ok_or_else(invalid)?;
    Ok((env, group))
}

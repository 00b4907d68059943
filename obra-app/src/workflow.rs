use anyhow::{Context, Result};
use obra_core::session::engine::SessionEngine;
use obra_schemas::file_formats::ScriptFile;
use std::{fs, path::Path};
use tracing::{info, warn};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
    pub events: usize,
}

pub fn load_script(path: &Path) -> Result<ScriptFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {:?}", path))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
}

/// Dispatches every scripted action in order.
///
/// With `keep_going` a rejected action is logged and skipped; otherwise the
/// replay stops with that action's error.
pub fn replay(engine: &mut SessionEngine, script: ScriptFile, keep_going: bool) -> Result<ReplaySummary> {
    info!(actions = script.actions.len(), "Replaying script");
    let mut summary = ReplaySummary::default();

    for (index, action) in script.actions.into_iter().enumerate() {
        let kind = action.kind();
        match engine.dispatch(action) {
            Ok(events) => {
                summary.applied += 1;
                summary.events += events.len();
            }
            Err(e) if keep_going => {
                warn!(step = index + 1, action = kind, "Skipping rejected action: {}", e);
                summary.rejected += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Step {} ({}) was rejected", index + 1, kind));
            }
        }
    }

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Replay finished"
    );
    Ok(summary)
}

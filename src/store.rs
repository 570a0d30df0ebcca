// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::fs::rename;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::state::TrackerState;
use crate::validate::validate_state;

/// Read and validate a state file. A missing file is an empty state.
pub fn load_state(path: &Path, total_pages: u32) -> Fallible<TrackerState> {
    if !path.exists() {
        log::debug!("No state file at {}, starting empty.", path.display());
        return Ok(TrackerState::new());
    }
    log::debug!("Loading state from {}...", path.display());
    let start = Instant::now();
    let content = read_to_string(path)?;
    let mut state = parse_state(&content, total_pages).map_err(|e| {
        ErrorReport::new(format!("could not load {}: {}", path.display(), message(&e)))
    })?;
    state.onboarding_complete |= !state.memorized_pages.is_empty();
    let duration = start.elapsed().as_millis();
    log::debug!("State loaded in {duration}ms.");
    Ok(state)
}

/// Parse and validate a state document.
pub fn parse_state(content: &str, total_pages: u32) -> Fallible<TrackerState> {
    let mut state: TrackerState = serde_json::from_str(content)?;
    validate_state(&mut state, total_pages)?;
    Ok(state)
}

/// Write a state file. The document is written next to the target and then
/// renamed over it, so a crash never leaves a half-written file behind.
pub fn save_state(path: &Path, state: &TrackerState) -> Fallible<()> {
    let json = serde_json::to_string_pretty(state)?;
    let tmp = temporary_path(path);
    write(&tmp, json)?;
    rename(&tmp, path)?;
    log::debug!(
        "Saved state to {} (revision {}).",
        path.display(),
        state.revision
    );
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn message(e: &ErrorReport) -> String {
    let s = e.to_string();
    s.strip_prefix("error: ").map(str::to_string).unwrap_or(s)
}

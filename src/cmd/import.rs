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
use std::mem::take;
use std::path::PathBuf;

use serde_json::Value;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::state::TrackerState;
use crate::stats::QualityStats;
use crate::store::parse_state;

/// Load a backup file into the tracker. The backup's pages replace the local
/// ones. The position, last review date and history are taken from the
/// backup when it has them, and kept from the local state otherwise.
pub fn import_backup(directory: Option<String>, file: PathBuf) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    if !file.exists() {
        return fail(format!("{} does not exist.", file.display()));
    }
    let content = read_to_string(&file)?;
    let (document, mut imported) =
        read_backup(&content, coll.config.total_pages).map_err(|e| {
            log::debug!("Import failed: {e}");
            ErrorReport::new("invalid backup file. Check that it's a valid tracker backup.")
        })?;
    if imported.memorized_pages.is_empty() {
        return fail("the backup contains no memorized pages.");
    }
    let present = |key: &str| document.get(key).is_some_and(|value| !value.is_null());
    if !present("currentPosition") {
        imported.current_position = coll
            .state
            .current_position
            .min(imported.memorized_pages.len());
    }
    if !present("lastReviewDate") {
        imported.last_review_date = coll.state.last_review_date.take();
    }
    if !present("reviewHistory") {
        imported.review_history = take(&mut coll.state.review_history);
    }
    imported.revision = imported.revision.max(coll.state.revision) + 1;
    imported.onboarding_complete = true;
    coll.state = imported;
    coll.save()?;
    let stats = QualityStats::of(&coll.state.memorized_pages, coll.config.total_pages);
    println!(
        "Imported {} pages: {} bronze, {} silver, {} gold.",
        stats.total, stats.bronze, stats.silver, stats.gold
    );
    Ok(())
}

fn read_backup(content: &str, total_pages: u32) -> Fallible<(Value, TrackerState)> {
    let document: Value = serde_json::from_str(content)?;
    let state = parse_state(content, total_pages)?;
    Ok((document, state))
}

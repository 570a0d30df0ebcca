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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::state::TrackerState;
use crate::stats::QualityStats;
use crate::types::timestamp::Timestamp;

/// The version of the backup format.
pub const BACKUP_VERSION: &str = "2.0";

pub fn export_collection(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let export: Export = get_export(&coll, Timestamp::now());
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

/// A backup document: the tracker state, plus some information for humans
/// reading the file. Importing only reads the state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export<'a> {
    #[serde(flatten)]
    state: &'a TrackerState,
    stats: QualityStats,
    export_date: Timestamp,
    version: &'static str,
}

fn get_export(coll: &Collection, now: Timestamp) -> Export<'_> {
    Export {
        state: &coll.state,
        stats: QualityStats::of(&coll.state.memorized_pages, coll.config.total_pages),
        export_date: now,
        version: BACKUP_VERSION,
    }
}

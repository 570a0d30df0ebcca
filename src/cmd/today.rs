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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::quran::surah_of_page;
use crate::scheduler::DAILY_RANK_BUDGET;
use crate::state::TrackerState;
use crate::types::page::Unit;

pub fn show_today(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    print!("{}", render_today(&coll.state));
    Ok(())
}

pub fn render_today(state: &TrackerState) -> String {
    let units: Vec<Unit> = state.units();
    if units.is_empty() {
        return "No pages memorized yet.\n".to_string();
    }
    let batch = state.todays_batch();
    let mut out = String::new();
    if batch.is_empty() {
        out.push_str("Nothing due: the cycle is finished. ");
        out.push_str("Run `complete` or `reset` to start over.\n");
    } else {
        let total: u32 = batch.iter().map(|u| u.rank()).sum();
        out.push_str(&format!(
            "Today: {} page(s), rank {total} of {DAILY_RANK_BUDGET}.\n",
            batch.len()
        ));
        for unit in batch.iter() {
            let surah = surah_of_page(unit.id).map(|s| s.name).unwrap_or("");
            out.push_str(&format!(
                "  page {:>3}  {:<6}  rank {}  {surah}\n",
                unit.id,
                unit.tier.to_string(),
                unit.rank()
            ));
        }
    }
    out.push_str(&format!(
        "Position {} of {}. {} day(s) left in this cycle; a full cycle takes {} day(s).\n",
        state.current_position,
        units.len(),
        state.remaining_days(),
        state.cycle_days()
    ));
    if let Some(date) = &state.last_review_date {
        out.push_str(&format!("Last review: {date}.\n"));
    }
    out
}

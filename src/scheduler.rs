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

//! The review scheduler.
//!
//! Memorized pages are reviewed in page order, in passes. Each day a
//! contiguous run of pages starting at the cursor is due. How many pages fit
//! into a day depends on their tiers: each page costs its rank, and a day's
//! reviews may cost at most [`DAILY_RANK_BUDGET`].
//!
//! Everything in this module is pure. The caller owns the cursor and the
//! history, and passes in the date.

use crate::types::history::HistoryEntry;
use crate::types::history::ReviewedPage;
use crate::types::page::Unit;
use crate::types::tier::TierChange;

/// The maximum total rank of the pages reviewed in one day.
pub const DAILY_RANK_BUDGET: u32 = 4;

/// The number of pages due when starting at `cursor`.
///
/// Pages are taken in order while the running rank stays within the budget.
/// A page that would exceed the budget ends the batch; a page that meets it
/// exactly is included and ends the batch. If not even the first page fits,
/// it is taken anyway, so that a day never makes zero progress.
fn batch_len(units: &[Unit], cursor: usize, budget: u32) -> usize {
    if cursor >= units.len() {
        return 0;
    }
    let mut total: u32 = 0;
    let mut count: usize = 0;
    for unit in &units[cursor..] {
        let rank = unit.rank();
        if total + rank > budget {
            break;
        }
        total += rank;
        count += 1;
        if total == budget {
            break;
        }
    }
    count.max(1)
}

/// The pages due for review today, given the ordered list of memorized
/// pages and the cursor. Empty if the cursor is at or past the end.
pub fn select_due_batch(units: &[Unit], cursor: usize, budget: u32) -> Vec<Unit> {
    let len = batch_len(units, cursor, budget);
    if len == 0 {
        return Vec::new();
    }
    units[cursor..cursor + len].to_vec()
}

/// Simulate daily reviews from `start` to the end of the list and count the
/// days.
fn count_days(units: &[Unit], start: usize) -> usize {
    let mut position = start;
    let mut days = 0;
    while position < units.len() {
        position += batch_len(units, position, DAILY_RANK_BUDGET);
        days += 1;
    }
    days
}

/// The number of days a full pass over the list takes.
pub fn estimate_full_cycle_days(units: &[Unit]) -> usize {
    count_days(units, 0)
}

/// The number of days left in the current pass.
pub fn estimate_remaining_days(units: &[Unit], cursor: usize) -> usize {
    count_days(units, cursor)
}

/// The result of completing a day's reviews.
#[derive(Clone, PartialEq, Debug)]
pub struct ReviewOutcome {
    pub new_cursor: usize,
    pub cycle_completed: bool,
    pub entry: HistoryEntry,
}

/// Advance the cursor past a completed batch.
///
/// `batch` is the batch as it was selected. `units` is the list as it
/// stands at completion: if the user changed a page's tier in between, the
/// history entry records the new tier, but the cursor still moves by the
/// length of the original batch.
pub fn advance_after_review(
    units: &[Unit],
    cursor: usize,
    batch: &[Unit],
    today: &str,
) -> ReviewOutcome {
    debug_assert!(
        cursor >= units.len() || cursor + batch.len() <= units.len(),
        "batch runs past the end of the list"
    );
    let pages_reviewed: Vec<ReviewedPage> = batch
        .iter()
        .map(|selected| {
            let confirmed = units
                .binary_search_by_key(&selected.id, |u| u.id)
                .map(|i| units[i].tier)
                .unwrap_or(selected.tier);
            ReviewedPage {
                id: selected.id,
                tier: confirmed,
                rank: confirmed.rank(),
                tier_change_direction: TierChange::between(selected.tier, confirmed),
            }
        })
        .collect();
    let total_rank: u32 = pages_reviewed.iter().map(|p| p.rank).sum();
    let new_position = cursor + batch.len();
    let cycle_completed = new_position >= units.len();
    let new_cursor = if cycle_completed { 0 } else { new_position };
    ReviewOutcome {
        new_cursor,
        cycle_completed,
        entry: HistoryEntry {
            date: today.to_string(),
            pages_reviewed,
            total_rank,
            position_before: cursor,
            cycle_completed,
        },
    }
}

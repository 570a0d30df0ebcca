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

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::memorized::MemorizedSet;
use crate::scheduler::DAILY_RANK_BUDGET;
use crate::scheduler::ReviewOutcome;
use crate::scheduler::advance_after_review;
use crate::scheduler::estimate_full_cycle_days;
use crate::scheduler::estimate_remaining_days;
use crate::scheduler::select_due_batch;
use crate::types::history::ReviewHistory;
use crate::types::page::PageId;
use crate::types::page::Unit;
use crate::types::tier::Tier;
use crate::types::tier::TierChange;

/// Everything the tracker persists. This is also the format of backups and
/// the unit of synchronization between devices.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default)]
    pub memorized_pages: MemorizedSet,
    /// Index into the ordered page list of the next page to review. Always
    /// in `0..=memorized_pages.len()`.
    #[serde(default)]
    pub current_position: usize,
    #[serde(default)]
    pub last_review_date: Option<String>,
    #[serde(default)]
    pub review_history: ReviewHistory,
    #[serde(default)]
    pub onboarding_complete: bool,
    /// Incremented on every change. Used to order snapshots from different
    /// devices.
    #[serde(default)]
    pub revision: u64,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh state for the given set of pages.
    pub fn with_pages(memorized_pages: MemorizedSet) -> Self {
        Self {
            onboarding_complete: !memorized_pages.is_empty(),
            memorized_pages,
            ..Self::default()
        }
    }

    /// The memorized pages in review order.
    pub fn units(&self) -> Vec<Unit> {
        self.memorized_pages.ordered()
    }

    pub fn todays_batch(&self) -> Vec<Unit> {
        select_due_batch(&self.units(), self.current_position, DAILY_RANK_BUDGET)
    }

    pub fn cycle_days(&self) -> usize {
        estimate_full_cycle_days(&self.units())
    }

    pub fn remaining_days(&self) -> usize {
        estimate_remaining_days(&self.units(), self.current_position)
    }

    /// Toggle whether a page is memorized. Returns true if the page is now
    /// memorized.
    pub fn toggle_page(&mut self, id: PageId) -> bool {
        let memorized = self.memorized_pages.mark_memorized(id);
        let len = self.memorized_pages.len();
        if self.current_position > len {
            log::debug!("Clamping cursor {} to {len}", self.current_position);
            self.current_position = len;
        }
        self.touch();
        memorized
    }

    pub fn change_tier(&mut self, id: PageId, tier: Tier) -> Fallible<TierChange> {
        let change = self.memorized_pages.set_tier(id, tier)?;
        self.touch();
        Ok(change)
    }

    /// Mark a batch as reviewed. `batch` must have been selected from this
    /// state; tiers may have been edited since, but no pages added or
    /// removed.
    pub fn complete_review(&mut self, batch: &[Unit], today: &str) -> ReviewOutcome {
        let outcome = advance_after_review(&self.units(), self.current_position, batch, today);
        if outcome.cycle_completed {
            log::info!("Review cycle completed on {today}");
        }
        self.current_position = outcome.new_cursor;
        self.last_review_date = Some(today.to_string());
        self.review_history.record(outcome.entry.clone());
        self.touch();
        outcome
    }

    /// Restart the current pass from the first page. History is kept.
    pub fn reset_position(&mut self) {
        self.current_position = 0;
        self.last_review_date = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

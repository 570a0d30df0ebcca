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

use crate::error::ErrorReport;
use crate::error::fail;
use crate::types::page::PageId;
use crate::types::tier::Tier;
use crate::types::tier::TierChange;
use crate::types::tier::deserialize_lossy;

/// The maximum number of entries kept in the review history.
pub const HISTORY_LIMIT: usize = 30;

/// A record of one completed review batch. Entries are never modified once
/// created.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHistoryEntry")]
pub struct HistoryEntry {
    /// The date the review was completed, as supplied by the caller.
    pub date: String,
    pub pages_reviewed: Vec<ReviewedPage>,
    pub total_rank: u32,
    /// The cursor before the batch was reviewed.
    pub position_before: usize,
    pub cycle_completed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedPage {
    pub id: PageId,
    /// The tier confirmed at completion time.
    pub tier: Tier,
    pub rank: u32,
    /// Compares the confirmed tier with the tier the page had when it was
    /// selected.
    pub tier_change_direction: TierChange,
}

/// Most recent entry first, at most [`HISTORY_LIMIT`] entries.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewHistory(Vec<HistoryEntry>);

impl ReviewHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Prepend an entry, dropping the oldest entries past the limit.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.0.insert(0, entry);
        self.0.truncate(HISTORY_LIMIT);
    }

    /// Drop entries past the limit. Returns the number of entries dropped.
    pub fn enforce_limit(&mut self) -> usize {
        let excess = self.0.len().saturating_sub(HISTORY_LIMIT);
        self.0.truncate(HISTORY_LIMIT);
        excess
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The on-disk shape of a history entry. Older documents store `page` and
/// `color` instead of `id` and `tier`, and a one-based `position`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHistoryEntry {
    date: String,
    #[serde(default)]
    pages_reviewed: Vec<RawReviewedPage>,
    total_rank: Option<u32>,
    position_before: Option<usize>,
    position: Option<usize>,
    #[serde(default)]
    cycle_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReviewedPage {
    #[serde(alias = "page")]
    id: PageId,
    #[serde(alias = "color", deserialize_with = "deserialize_lossy")]
    tier: Tier,
    rank: Option<u32>,
    #[serde(default)]
    tier_change_direction: TierChange,
}

impl TryFrom<RawHistoryEntry> for HistoryEntry {
    type Error = ErrorReport;

    fn try_from(raw: RawHistoryEntry) -> Result<Self, Self::Error> {
        let position_before = match (raw.position_before, raw.position) {
            (Some(before), _) => before,
            (None, Some(position)) => position.saturating_sub(1),
            (None, None) => return fail("history entry has no position."),
        };
        let pages_reviewed: Vec<ReviewedPage> = raw
            .pages_reviewed
            .into_iter()
            .map(|page| ReviewedPage {
                id: page.id,
                tier: page.tier,
                rank: page.rank.unwrap_or(page.tier.rank()),
                tier_change_direction: page.tier_change_direction,
            })
            .collect();
        let total_rank = raw
            .total_rank
            .unwrap_or_else(|| pages_reviewed.iter().map(|p| p.rank).sum());
        Ok(HistoryEntry {
            date: raw.date,
            pages_reviewed,
            total_rank,
            position_before,
            cycle_completed: raw.cycle_completed,
        })
    }
}

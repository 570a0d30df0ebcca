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

use std::str::FromStr;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::ReviewOutcome;
use crate::state::TrackerState;
use crate::types::date::Date;
use crate::types::page::PageId;
use crate::types::tier::Tier;
use crate::types::tier::TierChange;

/// A tier change made while confirming a review, written `<page>=<tier>`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TierEdit {
    pub page: PageId,
    pub tier: Tier,
}

impl FromStr for TierEdit {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((page, tier)) => Ok(TierEdit {
                page: page.parse()?,
                tier: tier.parse()?,
            }),
            None => fail(format!("expected <page>=<tier>, got: {s}")),
        }
    }
}

pub fn complete_review(
    directory: Option<String>,
    date: Option<Date>,
    edits: Vec<TierEdit>,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let today = date.unwrap_or_else(Date::today);
    let outcome = complete_batch(&mut coll.state, &edits, &today.to_string())?;
    coll.save()?;
    println!(
        "Reviewed {} page(s), total rank {}.",
        outcome.entry.pages_reviewed.len(),
        outcome.entry.total_rank
    );
    if outcome.cycle_completed {
        println!("Cycle completed! Starting again from the first page.");
    } else {
        println!(
            "{} day(s) left in this cycle.",
            coll.state.remaining_days()
        );
    }
    Ok(())
}

/// Select today's batch, apply the tier edits, then confirm the batch.
/// Edits may only touch pages in the batch.
pub fn complete_batch(
    state: &mut TrackerState,
    edits: &[TierEdit],
    today: &str,
) -> Fallible<ReviewOutcome> {
    if state.memorized_pages.is_empty() {
        return fail("no pages memorized.");
    }
    let batch = state.todays_batch();
    for edit in edits {
        if !batch.iter().any(|u| u.id == edit.page) {
            return fail(format!("page {} is not due today.", edit.page));
        }
    }
    for edit in edits {
        let change = state.change_tier(edit.page, edit.tier)?;
        if change != TierChange::None {
            log::debug!("Page {} is now {}", edit.page, edit.tier);
        }
    }
    Ok(state.complete_review(&batch, today))
}

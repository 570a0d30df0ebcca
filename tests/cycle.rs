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

//! Multi-day scenarios over the public API.

use murajaah::error::Fallible;
use murajaah::memorized::MemorizedSet;
use murajaah::scheduler::DAILY_RANK_BUDGET;
use murajaah::scheduler::estimate_full_cycle_days;
use murajaah::scheduler::estimate_remaining_days;
use murajaah::scheduler::select_due_batch;
use murajaah::state::TrackerState;
use murajaah::store::load_state;
use murajaah::store::save_state;
use murajaah::types::history::HISTORY_LIMIT;
use murajaah::types::page::PageId;
use murajaah::types::tier::Tier;

fn page(n: u32) -> PageId {
    PageId::new(n).unwrap()
}

/// Two weak pages at the start of Al-Baqarah and the last six pages of
/// the mushaf, all strong.
fn starter_pages() -> MemorizedSet {
    let mut pages = MemorizedSet::new();
    pages.insert(page(2), Tier::Bronze);
    pages.insert(page(3), Tier::Bronze);
    for n in 599..=604 {
        pages.insert(page(n), Tier::Gold);
    }
    pages
}

#[test]
fn test_starter_cycle() {
    let mut state = TrackerState::with_pages(starter_pages());
    // [2] [3, 599] [600..=603] [604]
    assert_eq!(state.cycle_days(), 4);

    let mut batches: Vec<Vec<u32>> = Vec::new();
    for day in 1..=4 {
        let batch = state.todays_batch();
        batches.push(batch.iter().map(|u| u.id.number()).collect());
        let outcome = state.complete_review(&batch, &format!("2025-01-0{day}"));
        assert_eq!(outcome.cycle_completed, day == 4);
    }
    assert_eq!(
        batches,
        vec![vec![2], vec![3, 599], vec![600, 601, 602, 603], vec![604]]
    );
    assert_eq!(state.current_position, 0);
    assert_eq!(state.review_history.len(), 4);
    assert!(state.review_history.latest().is_some_and(|e| e.cycle_completed));
}

#[test]
fn test_upgrades_shorten_the_next_cycle() -> Fallible<()> {
    let mut state = TrackerState::with_pages(starter_pages());
    let before = state.cycle_days();
    state.change_tier(page(2), Tier::Gold)?;
    state.change_tier(page(3), Tier::Gold)?;
    // Eight gold pages: two days of four.
    assert_eq!(state.cycle_days(), 2);
    assert!(state.cycle_days() < before);
    Ok(())
}

#[test]
fn test_remaining_days_count_down() {
    let mut state = TrackerState::with_pages(starter_pages());
    let mut remaining = state.remaining_days();
    assert_eq!(remaining, state.cycle_days());
    loop {
        let batch = state.todays_batch();
        let outcome = state.complete_review(&batch, "d");
        if outcome.cycle_completed {
            assert_eq!(remaining, 1);
            break;
        }
        assert_eq!(state.remaining_days(), remaining - 1);
        remaining = state.remaining_days();
    }
}

#[test]
fn test_estimates_agree_for_many_lists() {
    let tiers = [Tier::Bronze, Tier::Silver, Tier::Gold];
    for seed in 0..50usize {
        let units: Vec<_> = (0..seed)
            .map(|i| (page(i as u32 + 1), tiers[(i * 7 + seed) % 3]))
            .collect::<MemorizedSet>()
            .ordered();
        assert_eq!(
            estimate_remaining_days(&units, 0),
            estimate_full_cycle_days(&units)
        );
        let mut cursor = 0;
        while cursor < units.len() {
            let batch = select_due_batch(&units, cursor, DAILY_RANK_BUDGET);
            assert!(!batch.is_empty());
            assert!(batch.iter().map(|u| u.rank()).sum::<u32>() <= DAILY_RANK_BUDGET);
            cursor += batch.len();
        }
    }
}

#[test]
fn test_long_running_history_survives_a_reload() -> Fallible<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");
    let mut state = TrackerState::with_pages(starter_pages());
    for day in 0..45 {
        let batch = state.todays_batch();
        state.complete_review(&batch, &format!("day {day}"));
        save_state(&path, &state)?;
        state = load_state(&path, 604)?;
    }
    assert_eq!(state.review_history.len(), HISTORY_LIMIT);
    assert_eq!(
        state.review_history.latest().map(|e| e.date.as_str()),
        Some("day 44")
    );
    Ok(())
}

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
use crate::types::history::HistoryEntry;
use crate::types::tier::TierChange;

pub fn print_history(directory: Option<String>, limit: Option<usize>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let entries = coll.state.review_history.entries();
    if entries.is_empty() {
        println!("No reviews recorded.");
        return Ok(());
    }
    let limit = limit.unwrap_or(entries.len());
    for entry in entries.iter().take(limit) {
        println!("{}", render_entry(entry));
    }
    Ok(())
}

fn render_entry(entry: &HistoryEntry) -> String {
    let pages: Vec<String> = entry
        .pages_reviewed
        .iter()
        .map(|p| {
            let mark = match p.tier_change_direction {
                TierChange::Upgrade => "+",
                TierChange::Downgrade => "-",
                TierChange::None => "",
            };
            format!("{}{mark}", p.id)
        })
        .collect();
    let cycle = if entry.cycle_completed {
        " (cycle completed)"
    } else {
        ""
    };
    format!(
        "{}: pages {} from position {}, rank {}{cycle}",
        entry.date,
        pages.join(", "),
        entry.position_before,
        entry.total_rank
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;
    use crate::types::history::ReviewedPage;
    use crate::types::page::PageId;
    use crate::types::tier::Tier;

    #[test]
    fn test_render_entry() -> Fallible<()> {
        let entry = HistoryEntry {
            date: "2025-01-01".to_string(),
            pages_reviewed: vec![
                ReviewedPage {
                    id: PageId::new(4)?,
                    tier: Tier::Gold,
                    rank: 1,
                    tier_change_direction: TierChange::Upgrade,
                },
                ReviewedPage {
                    id: PageId::new(5)?,
                    tier: Tier::Bronze,
                    rank: 3,
                    tier_change_direction: TierChange::None,
                },
            ],
            total_rank: 4,
            position_before: 3,
            cycle_completed: true,
        };
        assert_eq!(
            render_entry(&entry),
            "2025-01-01: pages 4+, 5 from position 3, rank 4 (cycle completed)"
        );
        Ok(())
    }
}

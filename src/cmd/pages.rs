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
use crate::types::page::PageId;
use crate::types::tier::Tier;
use crate::types::tier::TierChange;
use crate::validate::validate_page;

/// Toggle whether a page is memorized.
pub fn mark_page(directory: Option<String>, page: PageId) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    validate_page(page, coll.config.total_pages)?;
    let memorized = coll.state.toggle_page(page);
    coll.save()?;
    if memorized {
        println!("Page {page} memorized (bronze).");
    } else {
        println!("Page {page} removed.");
    }
    Ok(())
}

pub fn set_page_tier(directory: Option<String>, page: PageId, tier: Tier) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let change = coll.state.change_tier(page, tier)?;
    coll.save()?;
    match change {
        TierChange::Upgrade => println!("Page {page} upgraded to {tier}."),
        TierChange::Downgrade => println!("Page {page} downgraded to {tier}."),
        TierChange::None => println!("Page {page} is already {tier}."),
    }
    Ok(())
}

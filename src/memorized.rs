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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::page::PageId;
use crate::types::page::Unit;
use crate::types::tier::Tier;
use crate::types::tier::TierChange;

/// The set of memorized pages and their quality tiers. A page that is not in
/// the set has not been memorized.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorizedSet(BTreeMap<PageId, Tier>);

impl MemorizedSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Toggle whether a page is memorized. Newly memorized pages start at
    /// Bronze. Returns true if the page is now memorized.
    ///
    /// Toggling twice restores membership, but not the tier: a page that
    /// comes back is Bronze again.
    pub fn mark_memorized(&mut self, id: PageId) -> bool {
        if self.0.remove(&id).is_some() {
            log::debug!("Page {id} removed");
            false
        } else {
            self.0.insert(id, Tier::Bronze);
            log::debug!("Page {id} memorized");
            true
        }
    }

    /// Overwrite the tier of a memorized page. Any transition is allowed,
    /// including downgrades.
    pub fn set_tier(&mut self, id: PageId, tier: Tier) -> Fallible<TierChange> {
        match self.0.get_mut(&id) {
            Some(current) => {
                let change = TierChange::between(*current, tier);
                *current = tier;
                Ok(change)
            }
            None => fail(format!("page {id} is not memorized.")),
        }
    }

    /// Insert a page with the given tier, replacing any existing tier.
    pub fn insert(&mut self, id: PageId, tier: Tier) {
        self.0.insert(id, tier);
    }

    pub fn tier(&self, id: PageId) -> Option<Tier> {
        self.0.get(&id).copied()
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.0.contains_key(&id)
    }

    /// The memorized pages in ascending page order. This is the order in
    /// which review passes traverse the set.
    pub fn ordered(&self) -> Vec<Unit> {
        self.0
            .iter()
            .map(|(&id, &tier)| Unit { id, tier })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, Tier)> + '_ {
        self.0.iter().map(|(&id, &tier)| (id, tier))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PageId, Tier)> for MemorizedSet {
    fn from_iter<I: IntoIterator<Item = (PageId, Tier)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageId {
        PageId::new(n).unwrap()
    }

    #[test]
    fn test_mark_memorized_inserts_bronze() {
        let mut set = MemorizedSet::new();
        assert!(set.mark_memorized(page(5)));
        assert_eq!(set.tier(page(5)), Some(Tier::Bronze));
    }

    #[test]
    fn test_mark_memorized_twice_restores_membership() {
        let mut set: MemorizedSet = [(page(1), Tier::Gold)].into_iter().collect();
        let original = set.clone();
        assert!(set.mark_memorized(page(2)));
        assert!(!set.mark_memorized(page(2)));
        assert_eq!(set, original);
    }

    #[test]
    fn test_mark_memorized_twice_resets_tier() {
        let mut set: MemorizedSet = [(page(1), Tier::Gold)].into_iter().collect();
        assert!(!set.mark_memorized(page(1)));
        assert!(set.mark_memorized(page(1)));
        assert!(set.contains(page(1)));
        assert_eq!(set.tier(page(1)), Some(Tier::Bronze));
    }

    #[test]
    fn test_set_tier() -> Fallible<()> {
        let mut set: MemorizedSet = [(page(1), Tier::Bronze)].into_iter().collect();
        assert_eq!(set.set_tier(page(1), Tier::Gold)?, TierChange::Upgrade);
        assert_eq!(set.set_tier(page(1), Tier::Bronze)?, TierChange::Downgrade);
        assert_eq!(set.set_tier(page(1), Tier::Bronze)?, TierChange::None);
        assert_eq!(set.tier(page(1)), Some(Tier::Bronze));
        Ok(())
    }

    #[test]
    fn test_set_tier_requires_memorized_page() {
        let mut set = MemorizedSet::new();
        assert!(set.set_tier(page(9), Tier::Gold).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_ordered_is_ascending() {
        let set: MemorizedSet = [
            (page(600), Tier::Gold),
            (page(2), Tier::Bronze),
            (page(45), Tier::Silver),
        ]
        .into_iter()
        .collect();
        let ids: Vec<u32> = set.ordered().iter().map(|u| u.id.number()).collect();
        assert_eq!(ids, vec![2, 45, 600]);
    }

    #[test]
    fn test_json_shape() -> Result<(), serde_json::Error> {
        let set: MemorizedSet = [(page(2), Tier::Bronze), (page(604), Tier::Gold)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set)?;
        assert_eq!(json, r#"{"2":"red","604":"super-green"}"#);
        let back: MemorizedSet = serde_json::from_str(&json)?;
        assert_eq!(back, set);
        Ok(())
    }
}

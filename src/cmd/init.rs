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
use crate::error::fail;
use crate::memorized::MemorizedSet;
use crate::state::TrackerState;
use crate::types::page::parse_page_ranges;
use crate::types::tier::Tier;

/// Create the state file for a tracker directory, optionally with an
/// initial selection of memorized pages.
pub fn init_tracker(directory: Option<String>, pages: Option<String>, tier: Tier) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    if coll.state_path.exists() {
        return fail(format!(
            "{} already exists.",
            coll.state_path.display()
        ));
    }
    let mut selection = MemorizedSet::new();
    if let Some(pages) = pages {
        for id in parse_page_ranges(&pages, coll.config.total_pages)? {
            selection.insert(id, tier);
        }
    }
    let count = selection.len();
    coll.state = TrackerState::with_pages(selection);
    coll.save()?;
    println!("Tracking {count} pages in {}.", coll.state_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::page::PageId;

    #[test]
    fn test_init() -> Fallible<()> {
        let dir = tempdir()?;
        let path = Some(dir.path().display().to_string());
        init_tracker(path.clone(), Some("2-3,604".to_string()), Tier::Gold)?;
        let coll = Collection::new(path)?;
        assert_eq!(coll.state.memorized_pages.len(), 3);
        assert_eq!(coll.state.memorized_pages.tier(PageId::new(604)?), Some(Tier::Gold));
        assert!(coll.state.onboarding_complete);
        Ok(())
    }

    #[test]
    fn test_init_twice() -> Fallible<()> {
        let dir = tempdir()?;
        let path = Some(dir.path().display().to_string());
        init_tracker(path.clone(), None, Tier::Bronze)?;
        assert!(init_tracker(path, None, Tier::Bronze).is_err());
        Ok(())
    }

    #[test]
    fn test_init_out_of_range() -> Fallible<()> {
        let dir = tempdir()?;
        let path = Some(dir.path().display().to_string());
        assert!(init_tracker(path.clone(), Some("600-610".to_string()), Tier::Bronze).is_err());
        assert!(!dir.path().join("murajaah.json").exists());
        Ok(())
    }

    #[test]
    fn test_init_huge_range() -> Fallible<()> {
        let dir = tempdir()?;
        let path = Some(dir.path().display().to_string());
        let err = init_tracker(path, Some("1-4294967295".to_string()), Tier::Bronze)
            .err()
            .map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("error: page 4294967295 is out of range: pages are numbered 1 to 604.")
        );
        assert!(!dir.path().join("murajaah.json").exists());
        Ok(())
    }
}

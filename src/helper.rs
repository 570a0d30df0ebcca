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

use tempfile::TempDir;
use tempfile::tempdir;

use crate::cmd::init::init_tracker;
use crate::error::Fallible;
use crate::types::tier::Tier;

/// Create a tracker in a temporary directory with the given pages, all at
/// the same tier. The directory is deleted when the returned guard drops.
pub fn create_tmp_tracker(pages: &str, tier: Tier) -> Fallible<(TempDir, String)> {
    let dir = tempdir()?;
    let path = dir.path().canonicalize()?.display().to_string();
    init_tracker(Some(path.clone()), Some(pages.to_string()), tier)?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;

    #[test]
    fn test_create_tmp_tracker() -> Fallible<()> {
        let (_dir, path) = create_tmp_tracker("1-5", Tier::Silver)?;
        let coll = Collection::new(Some(path))?;
        assert_eq!(coll.state.memorized_pages.len(), 5);
        Ok(())
    }
}

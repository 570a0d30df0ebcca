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

pub fn reset_position(directory: Option<String>) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    coll.state.reset_position();
    coll.save()?;
    println!("Review position reset to the first page.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::complete::complete_review;
    use crate::helper::create_tmp_tracker;
    use crate::types::tier::Tier;

    #[test]
    fn test_reset() -> Fallible<()> {
        let (_dir, path) = create_tmp_tracker("1-3", Tier::Bronze)?;
        let path = Some(path);
        complete_review(path.clone(), Some("2025-01-01".parse()?), Vec::new())?;
        assert_eq!(Collection::new(path.clone())?.state.current_position, 1);
        reset_position(path.clone())?;
        let coll = Collection::new(path)?;
        assert_eq!(coll.state.current_position, 0);
        assert_eq!(coll.state.last_review_date, None);
        assert_eq!(coll.state.review_history.len(), 1);
        Ok(())
    }
}

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

//! Checks applied to state read from disk or imported from a backup, before
//! any scheduling happens on it.

use crate::error::Fallible;
use crate::error::fail;
use crate::state::TrackerState;
use crate::types::page::PageId;

/// Check that a page number is within the mushaf.
pub fn validate_page(id: PageId, total_pages: u32) -> Fallible<()> {
    if id.number() < 1 || id.number() > total_pages {
        return fail(format!(
            "page {id} is out of range: pages are numbered 1 to {total_pages}."
        ));
    }
    Ok(())
}

/// Validate a loaded state. Overlong history is truncated rather than
/// rejected; everything else is an error.
pub fn validate_state(state: &mut TrackerState, total_pages: u32) -> Fallible<()> {
    let invalid: Vec<String> = state
        .memorized_pages
        .iter()
        .filter(|(id, _)| validate_page(*id, total_pages).is_err())
        .map(|(id, _)| id.to_string())
        .collect();
    if !invalid.is_empty() {
        return fail(format!("Invalid page numbers: {}", invalid.join(", ")));
    }
    let len = state.memorized_pages.len();
    if state.current_position > len {
        return fail(format!(
            "review position {} is past the end of the {len} memorized pages.",
            state.current_position
        ));
    }
    let dropped = state.review_history.enforce_limit();
    if dropped > 0 {
        log::warn!("Dropped {dropped} review history entries over the limit.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::history::HISTORY_LIMIT;

    fn load(json: &str) -> Fallible<TrackerState> {
        let mut state: TrackerState = serde_json::from_str(json)?;
        validate_state(&mut state, 604)?;
        Ok(state)
    }

    #[test]
    fn test_valid_state() -> Fallible<()> {
        let state =
            load(r#"{"memorizedPages": {"1": "red", "604": "gold"}, "currentPosition": 2}"#)?;
        assert_eq!(state.memorized_pages.len(), 2);
        Ok(())
    }

    #[test]
    fn test_page_out_of_range() {
        assert!(load(r#"{"memorizedPages": {"605": "red"}}"#).is_err());
        assert!(load(r#"{"memorizedPages": {"0": "red"}}"#).is_err());
    }

    #[test]
    fn test_unknown_tier() {
        assert!(load(r#"{"memorizedPages": {"5": "purple"}}"#).is_err());
    }

    #[test]
    fn test_cursor_out_of_range() {
        assert!(load(r#"{"memorizedPages": {"5": "red"}, "currentPosition": 2}"#).is_err());
        assert!(load(r#"{"memorizedPages": {"5": "red"}, "currentPosition": -1}"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(load(r#"{"memorizedPages": "#).is_err());
        assert!(load(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_long_history_is_truncated() -> Fallible<()> {
        let entries: Vec<String> = (0..40)
            .map(|i| format!(r#"{{"date": "{i}", "positionBefore": 0}}"#))
            .collect();
        let json = format!(r#"{{"reviewHistory": [{}]}}"#, entries.join(","));
        let state = load(&json)?;
        assert_eq!(state.review_history.len(), HISTORY_LIMIT);
        assert_eq!(state.review_history.latest().map(|e| e.date.as_str()), Some("0"));
        Ok(())
    }

    #[test]
    fn test_validate_page() -> Fallible<()> {
        validate_page(PageId::new(604)?, 604)?;
        assert!(validate_page(PageId::new(605)?, 604).is_err());
        Ok(())
    }
}

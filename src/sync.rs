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

//! Reconciliation of tracker state between devices.
//!
//! Each device keeps a full copy of the state. Copies are ordered by their
//! revision counter: the higher revision wins. Two different copies with the
//! same revision were edited independently, and the user has to pick one.

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::error::Fallible;
use crate::state::TrackerState;

/// A content hash of a tracker state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StateDigest(blake3::Hash);

impl Display for StateDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

pub fn digest(state: &TrackerState) -> Fallible<StateDigest> {
    let bytes = serde_json::to_vec(state)?;
    Ok(StateDigest(blake3::hash(&bytes)))
}

/// What the user needs to see to choose between two copies.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Summary {
    pub page_count: usize,
    pub last_review_date: Option<String>,
    pub revision: u64,
}

impl Summary {
    pub fn of(state: &TrackerState) -> Self {
        Self {
            page_count: state.memorized_pages.len(),
            last_review_date: state.last_review_date.clone(),
            revision: state.revision,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let date = self.last_review_date.as_deref().unwrap_or("never");
        write!(
            f,
            "{} pages, last reviewed {}, revision {}",
            self.page_count, date, self.revision
        )
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reconciliation {
    /// Both copies are identical.
    InSync,
    /// The local copy is newer, or the remote one is empty.
    KeepLocal,
    /// The remote copy is newer, or the local one is empty.
    TakeRemote,
    /// The copies diverged.
    Conflict { local: Summary, remote: Summary },
}

pub fn reconcile(local: &TrackerState, remote: &TrackerState) -> Fallible<Reconciliation> {
    if digest(local)? == digest(remote)? {
        return Ok(Reconciliation::InSync);
    }
    if local.memorized_pages.is_empty() && !remote.memorized_pages.is_empty() {
        return Ok(Reconciliation::TakeRemote);
    }
    if remote.memorized_pages.is_empty() && !local.memorized_pages.is_empty() {
        return Ok(Reconciliation::KeepLocal);
    }
    let reconciliation = match local.revision.cmp(&remote.revision) {
        std::cmp::Ordering::Greater => Reconciliation::KeepLocal,
        std::cmp::Ordering::Less => Reconciliation::TakeRemote,
        std::cmp::Ordering::Equal => Reconciliation::Conflict {
            local: Summary::of(local),
            remote: Summary::of(remote),
        },
    };
    Ok(reconciliation)
}

/// Which copy to keep when two copies conflict.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Prefer {
    /// Keep this device's copy.
    Local,
    /// Keep the other copy.
    Remote,
}

/// Pick the copy to keep after a conflict. The winner's revision is moved
/// past both copies so that it wins the next reconciliation everywhere.
pub fn resolve(local: TrackerState, remote: TrackerState, prefer: Prefer) -> TrackerState {
    let revision = local.revision.max(remote.revision) + 1;
    let mut winner = match prefer {
        Prefer::Local => local,
        Prefer::Remote => remote,
    };
    winner.revision = revision;
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::page::PageId;
    use crate::types::tier::Tier;

    fn state(pages: &[u32]) -> TrackerState {
        let mut state = TrackerState::new();
        for &n in pages {
            state.toggle_page(PageId::new(n).unwrap());
        }
        state
    }

    #[test]
    fn test_digest_is_stable() -> Fallible<()> {
        let a = state(&[1, 2, 3]);
        let b = state(&[3, 2, 1]);
        assert_eq!(digest(&a)?, digest(&b)?);
        assert_eq!(digest(&a)?.to_string().len(), 64);
        Ok(())
    }

    #[test]
    fn test_identical_copies() -> Fallible<()> {
        let a = state(&[1, 2]);
        assert_eq!(reconcile(&a, &a.clone())?, Reconciliation::InSync);
        Ok(())
    }

    #[test]
    fn test_empty_side_loses() -> Fallible<()> {
        let empty = TrackerState::new();
        let full = state(&[1]);
        assert_eq!(reconcile(&empty, &full)?, Reconciliation::TakeRemote);
        assert_eq!(reconcile(&full, &empty)?, Reconciliation::KeepLocal);
        Ok(())
    }

    #[test]
    fn test_higher_revision_wins() -> Fallible<()> {
        let base = state(&[1, 2, 3]);
        let mut ahead = base.clone();
        let batch = ahead.todays_batch();
        ahead.complete_review(&batch, "2025-01-01");
        assert_eq!(reconcile(&ahead, &base)?, Reconciliation::KeepLocal);
        assert_eq!(reconcile(&base, &ahead)?, Reconciliation::TakeRemote);
        Ok(())
    }

    #[test]
    fn test_divergent_edits_conflict() -> Fallible<()> {
        let base = state(&[1, 2, 3]);
        let mut phone = base.clone();
        let batch = phone.todays_batch();
        phone.complete_review(&batch, "2025-01-01");
        let mut laptop = base.clone();
        laptop.change_tier(PageId::new(2)?, Tier::Gold)?;
        match reconcile(&phone, &laptop)? {
            Reconciliation::Conflict { local, remote } => {
                assert_eq!(local.last_review_date.as_deref(), Some("2025-01-01"));
                assert_eq!(remote.last_review_date, None);
                assert_eq!(local.page_count, 3);
            }
            other => panic!("expected a conflict, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_resolve_bumps_revision() -> Fallible<()> {
        let local = state(&[1]);
        let remote = state(&[1, 2]);
        let winner = resolve(local.clone(), remote.clone(), Prefer::Local);
        assert_eq!(winner.memorized_pages, local.memorized_pages);
        assert!(winner.revision > remote.revision);
        assert_eq!(reconcile(&winner, &remote)?, Reconciliation::KeepLocal);
        Ok(())
    }
}

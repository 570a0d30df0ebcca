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

use std::path::PathBuf;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::load_state;
use crate::store::save_state;
use crate::sync::Prefer;
use crate::sync::Reconciliation;
use crate::sync::reconcile;
use crate::sync::resolve;

/// Reconcile the tracker state with another copy of it, such as one in a
/// shared folder. Afterwards both files hold the same state.
pub fn sync_with(
    directory: Option<String>,
    other: PathBuf,
    prefer: Option<Prefer>,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let remote = load_state(&other, coll.config.total_pages)?;
    match reconcile(&coll.state, &remote)? {
        Reconciliation::InSync => {
            println!("Already in sync.");
        }
        Reconciliation::KeepLocal => {
            save_state(&other, &coll.state)?;
            println!("Updated {} from the local copy.", other.display());
        }
        Reconciliation::TakeRemote => {
            coll.state = remote;
            coll.save()?;
            println!("Updated the local copy from {}.", other.display());
        }
        Reconciliation::Conflict { local, remote: theirs } => {
            let Some(prefer) = prefer else {
                return fail(format!(
                    "the copies have diverged.\n  local:  {local}\n  remote: {theirs}\n\
                     Rerun with --prefer local or --prefer remote."
                ));
            };
            log::debug!("Resolving conflict in favour of {prefer:?}");
            coll.state = resolve(coll.state, remote, prefer);
            coll.save()?;
            save_state(&other, &coll.state)?;
            println!("Conflict resolved; both copies now hold the {prefer:?} state.");
        }
    }
    Ok(())
}

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
use crate::quran::overview;

pub fn print_overview(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let progress = overview(&coll.state.memorized_pages);
    if progress.is_empty() {
        println!("No pages memorized yet.");
        return Ok(());
    }
    for p in progress {
        println!(
            "{:>3}. {:<16} {:>3}/{:<3} {:>3}%  bronze {} silver {} gold {}",
            p.surah.number,
            p.surah.name,
            p.memorized_count,
            p.total_pages,
            p.percentage,
            p.tiers.bronze,
            p.tiers.silver,
            p.tiers.gold
        );
    }
    Ok(())
}

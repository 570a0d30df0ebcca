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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::tier::Tier;

/// The number of a page in the mushaf. Page numbers start at one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(u32);

impl PageId {
    pub fn new(number: u32) -> Fallible<Self> {
        if number == 0 {
            return fail("page numbers start at 1.");
        }
        Ok(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for PageId {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| ErrorReport::new(format!("invalid page number: {s}")))?;
        PageId::new(number)
    }
}

/// A memorized page together with its quality tier. This is the element
/// type of the ordered list the scheduler walks over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Unit {
    pub id: PageId,
    pub tier: Tier,
}

impl Unit {
    pub fn rank(&self) -> u32 {
        self.tier.rank()
    }
}

/// Parse a page selection such as `1,5-7,604` into page ids. Ranges are
/// inclusive; the result is sorted and deduplicated. Every page must be at
/// most `total_pages`, and this is checked before a range is expanded.
pub fn parse_page_ranges(s: &str, total_pages: u32) -> Fallible<Vec<PageId>> {
    let in_range = |id: PageId| -> Fallible<PageId> {
        if id.number() > total_pages {
            return fail(format!(
                "page {id} is out of range: pages are numbered 1 to {total_pages}."
            ));
        }
        Ok(id)
    };
    let mut pages: Vec<PageId> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once('-') {
            Some((start, end)) => {
                let start: PageId = start.parse()?;
                let end: PageId = end.parse()?;
                if start > end {
                    return fail(format!("invalid page range: {part}"));
                }
                in_range(end)?;
                pages.extend((start.number()..=end.number()).map(PageId));
            }
            None => pages.push(in_range(part.parse()?)?),
        }
    }
    pages.sort();
    pages.dedup();
    Ok(pages)
}

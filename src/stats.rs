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

use serde::Serialize;

use crate::memorized::MemorizedSet;
use crate::types::tier::Tier;

/// Summary statistics over the quality tiers of the memorized pages.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityStats {
    pub bronze: usize,
    pub silver: usize,
    pub gold: usize,
    pub total: usize,
    /// The sum of the ranks of all pages.
    pub total_points: u32,
    pub bronze_percentage: u32,
    pub silver_percentage: u32,
    pub gold_percentage: u32,
    /// Mean quality, scoring Gold as 3, Silver as 2 and Bronze as 1.
    pub average_quality: f64,
    pub completion_percentage: u32,
}

impl QualityStats {
    pub fn of(pages: &MemorizedSet, total_pages: u32) -> Self {
        let mut bronze = 0;
        let mut silver = 0;
        let mut gold = 0;
        let mut total_points = 0;
        for (_, tier) in pages.iter() {
            match tier {
                Tier::Bronze => bronze += 1,
                Tier::Silver => silver += 1,
                Tier::Gold => gold += 1,
            }
            total_points += tier.rank();
        }
        let total = pages.len();
        let average_quality = if total > 0 {
            (gold * 3 + silver * 2 + bronze) as f64 / total as f64
        } else {
            0.0
        };
        Self {
            bronze,
            silver,
            gold,
            total,
            total_points,
            bronze_percentage: percentage(bronze, total),
            silver_percentage: percentage(silver, total),
            gold_percentage: percentage(gold, total),
            average_quality,
            completion_percentage: percentage(total, total_pages as usize),
        }
    }
}

/// `part` as a rounded percentage of `whole`; zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

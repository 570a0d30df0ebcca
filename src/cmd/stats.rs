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

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::state::TrackerState;
use crate::stats::QualityStats;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let stats = Stats::of(&coll.state, coll.config.total_pages);
    match format {
        StatsFormat::Text => {
            let q = &stats.quality;
            println!("Pages memorized: {} ({}%)", q.total, q.completion_percentage);
            println!("  bronze: {} ({}%)", q.bronze, q.bronze_percentage);
            println!("  silver: {} ({}%)", q.silver, q.silver_percentage);
            println!("  gold:   {} ({}%)", q.gold, q.gold_percentage);
            println!("Average quality: {:.2}", q.average_quality);
            println!("Pages due today: {}", stats.pages_due_today);
            println!(
                "Cycle length: {} day(s), {} remaining",
                stats.cycle_days, stats.remaining_days
            );
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(flatten)]
    quality: QualityStats,
    current_position: usize,
    pages_due_today: usize,
    cycle_days: usize,
    remaining_days: usize,
    reviews_recorded: usize,
}

impl Stats {
    pub fn of(state: &TrackerState, total_pages: u32) -> Self {
        Self {
            quality: QualityStats::of(&state.memorized_pages, total_pages),
            current_position: state.current_position,
            pages_due_today: state.todays_batch().len(),
            cycle_days: state.cycle_days(),
            remaining_days: state.remaining_days(),
            reviews_recorded: state.review_history.len(),
        }
    }
}

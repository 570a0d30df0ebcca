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

use clap::Parser;

use crate::cmd::check::check_tracker;
use crate::cmd::complete::TierEdit;
use crate::cmd::complete::complete_review;
use crate::cmd::export::export_collection;
use crate::cmd::history::print_history;
use crate::cmd::import::import_backup;
use crate::cmd::init::init_tracker;
use crate::cmd::overview::print_overview;
use crate::cmd::pages::mark_page;
use crate::cmd::pages::set_page_tier;
use crate::cmd::reset::reset_position;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::cmd::sync::sync_with;
use crate::cmd::today::show_today;
use crate::error::Fallible;
use crate::sync::Prefer;
use crate::types::date::Date;
use crate::types::page::PageId;
use crate::types::tier::Tier;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Start tracking in a directory.
    Init {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Pages already memorized, e.g. `1,582-604`.
        #[arg(long)]
        pages: Option<String>,
        /// The tier to give the initial pages.
        #[arg(long, default_value = "bronze")]
        tier: Tier,
    },
    /// Show the pages due for review today.
    Today {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Mark today's pages as reviewed.
    Complete {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The review date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<Date>,
        /// Change the tier of a page in today's batch before completing, e.g. `12=gold`.
        #[arg(long = "set")]
        edits: Vec<TierEdit>,
    },
    /// Toggle whether a page is memorized.
    Mark {
        page: PageId,
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Set the tier of a memorized page.
    Tier {
        page: PageId,
        tier: Tier,
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Restart the review cycle from the first page.
    Reset {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print statistics.
    Stats {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Show progress per surah.
    Overview {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Show recent reviews.
    History {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Show at most this many entries.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print a backup of the tracker as JSON.
    Export {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Replace the tracker state with a backup.
    Import {
        file: PathBuf,
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Check that the tracker state is valid.
    Check {
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Reconcile the tracker state with another copy of it.
    Sync {
        other: PathBuf,
        /// Path to the tracker directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which copy to keep if both were changed independently.
        #[arg(long)]
        prefer: Option<Prefer>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Init {
            directory,
            pages,
            tier,
        } => init_tracker(directory, pages, tier),
        Command::Today { directory } => show_today(directory),
        Command::Complete {
            directory,
            date,
            edits,
        } => complete_review(directory, date, edits),
        Command::Mark { page, directory } => mark_page(directory, page),
        Command::Tier {
            page,
            tier,
            directory,
        } => set_page_tier(directory, page, tier),
        Command::Reset { directory } => reset_position(directory),
        Command::Stats { directory, format } => print_stats(directory, format),
        Command::Overview { directory } => print_overview(directory),
        Command::History { directory, limit } => print_history(directory, limit),
        Command::Export { directory } => export_collection(directory),
        Command::Import { file, directory } => import_backup(directory, file),
        Command::Check { directory } => check_tracker(directory),
        Command::Sync {
            other,
            directory,
            prefer,
        } => sync_with(directory, other, prefer),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_parse_complete() {
        let cli = Command::try_parse_from([
            "murajaah", "complete", "--date", "2025-01-02", "--set", "3=gold", "--set", "4=red",
        ]);
        match cli {
            Ok(Command::Complete {
                directory,
                date,
                edits,
            }) => {
                assert_eq!(directory, None);
                assert_eq!(date.map(|d| d.to_string()).as_deref(), Some("2025-01-02"));
                assert_eq!(edits.len(), 2);
                assert_eq!(edits[1].tier, Tier::Bronze);
            }
            _ => panic!("expected the complete command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_tier() {
        assert!(Command::try_parse_from(["murajaah", "tier", "3", "platinum"]).is_err());
    }
}

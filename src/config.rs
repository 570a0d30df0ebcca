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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::quran::MUSHAF_PAGES;

/// The name of the optional configuration file in the tracker directory.
pub const CONFIG_FILE: &str = "murajaah.toml";

const DEFAULT_STATE_FILE: &str = "murajaah.json";

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The state file, relative to the tracker directory.
    #[serde(default = "default_state_file")]
    pub state_file: String,
    /// Page numbers above this are rejected.
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_state_file() -> String {
    DEFAULT_STATE_FILE.to_string()
}

fn default_total_pages() -> u32 {
    MUSHAF_PAGES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            total_pages: default_total_pages(),
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        if config.total_pages == 0 {
            return fail("total_pages must be positive.");
        }
        if config.state_file.trim().is_empty() {
            return fail("state_file must not be empty.");
        }
        Ok(config)
    }

    /// Read the configuration from a tracker directory, falling back to the
    /// defaults if there is no configuration file.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No configuration file, using defaults.");
            return Ok(Self::default());
        }
        log::debug!("Reading configuration from {}", path.display());
        Self::parse(&read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() -> Fallible<()> {
        assert_eq!(Config::parse("")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_parse() -> Fallible<()> {
        let config = Config::parse("state_file = \"hifz.json\"\ntotal_pages = 20\n")?;
        assert_eq!(config.state_file, "hifz.json");
        assert_eq!(config.total_pages, 20);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::parse("daily_budget = 6").is_err());
    }

    #[test]
    fn test_rejects_zero_pages() {
        assert!(Config::parse("total_pages = 0").is_err());
    }

    #[test]
    fn test_load() -> Fallible<()> {
        let dir = tempdir()?;
        assert_eq!(Config::load(dir.path())?, Config::default());
        write(dir.path().join(CONFIG_FILE), "total_pages = 30")?;
        assert_eq!(Config::load(dir.path())?.total_pages, 30);
        Ok(())
    }
}

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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::state::TrackerState;
use crate::store::load_state;
use crate::store::save_state;

/// A tracker directory: its configuration and its state.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub state_path: PathBuf,
    pub state: TrackerState,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config: Config = Config::load(&directory)?;
        let state_path: PathBuf = directory.join(&config.state_file);
        let state: TrackerState = load_state(&state_path, config.total_pages)?;

        Ok(Self {
            directory,
            config,
            state_path,
            state,
        })
    }

    pub fn save(&self) -> Fallible<()> {
        save_state(&self.state_path, &self.state)
    }
}

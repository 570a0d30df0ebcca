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

//! A review scheduler for memorized pages of the Quran.
//!
//! Pages are reviewed in page order, in repeating cycles. Each page carries
//! a quality tier, and the tier decides how much of the fixed daily budget
//! the page uses up: strong pages are cheap, so more of them fit in a day.
//! The scheduling core ([`scheduler`], [`memorized`], [`state`]) is pure and
//! takes the date as a parameter; the remaining modules are the command-line
//! host around it.

pub mod cli;
pub mod cmd;
pub mod collection;
pub mod config;
pub mod error;
#[cfg(test)]
mod helper;
pub mod memorized;
pub mod quran;
pub mod scheduler;
pub mod state;
pub mod stats;
pub mod store;
pub mod sync;
pub mod types;
pub mod validate;

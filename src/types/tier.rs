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
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ErrorReport;
use crate::error::fail;

/// The rank of a tier we can't make sense of. Unknown tiers are treated as
/// the hardest.
pub const FALLBACK_RANK: u32 = 3;

/// How confidently a page is memorized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tier {
    /// Recently memorized, or in need of a refresh.
    Bronze,
    /// Can be recalled with some effort.
    Silver,
    /// Confident recall, tested in prayer.
    Gold,
}

impl Tier {
    /// The cost of reviewing a page of this tier against the daily budget.
    /// Better tiers are cheaper.
    pub fn rank(self) -> u32 {
        match self {
            Tier::Gold => 1,
            Tier::Silver => 2,
            Tier::Bronze => 3,
        }
    }

    /// The label used in persisted documents.
    fn wire_label(self) -> &'static str {
        match self {
            Tier::Bronze => "red",
            Tier::Silver => "green",
            Tier::Gold => "super-green",
        }
    }

    /// Parse either a canonical (`gold`) or a legacy (`super-green`) label.
    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "bronze" | "red" => Some(Tier::Bronze),
            "silver" | "green" => Some(Tier::Silver),
            "gold" | "super-green" => Some(Tier::Gold),
            _ => None,
        }
    }

    /// Like [`Tier::from_label`], but anything unrecognized is Bronze.
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Tier::Bronze)
    }
}

pub fn rank_of(tier: Tier) -> u32 {
    tier.rank()
}

/// Rank of a raw tier label, as found in imported or historical data.
pub fn rank_of_label(label: &str) -> u32 {
    Tier::from_label(label)
        .map(Tier::rank)
        .unwrap_or(FALLBACK_RANK)
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Bronze => write!(f, "bronze"),
            Tier::Silver => write!(f, "silver"),
            Tier::Gold => write!(f, "gold"),
        }
    }
}

impl FromStr for Tier {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Tier::from_label(s) {
            Some(tier) => Ok(tier),
            None => fail(format!("Invalid tier: {s}")),
        }
    }
}

impl TryFrom<String> for Tier {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Tier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_label())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Tier::try_from(string).map_err(serde::de::Error::custom)
    }
}

/// Deserialize a tier without failing on unknown labels. Used for history
/// entries, which are a log rather than a source of truth.
pub fn deserialize_lossy<'de, D>(deserializer: D) -> Result<Tier, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    Ok(Tier::from_label_lossy(&string))
}

/// The direction of a change in tier.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierChange {
    Upgrade,
    Downgrade,
    #[default]
    None,
}

impl TierChange {
    pub fn between(from: Tier, to: Tier) -> Self {
        match to.rank().cmp(&from.rank()) {
            std::cmp::Ordering::Less => TierChange::Upgrade,
            std::cmp::Ordering::Greater => TierChange::Downgrade,
            std::cmp::Ordering::Equal => TierChange::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank() {
        assert_eq!(rank_of(Tier::Gold), 1);
        assert_eq!(rank_of(Tier::Silver), 2);
        assert_eq!(rank_of(Tier::Bronze), 3);
    }

    #[test]
    fn test_rank_of_label_is_total() {
        assert_eq!(rank_of_label("super-green"), 1);
        assert_eq!(rank_of_label("green"), 2);
        assert_eq!(rank_of_label("red"), 3);
        assert_eq!(rank_of_label("Gold"), 1);
        assert_eq!(rank_of_label("purple"), 3);
        assert_eq!(rank_of_label(""), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!("gold".parse::<Tier>().ok(), Some(Tier::Gold));
        assert_eq!("SILVER".parse::<Tier>().ok(), Some(Tier::Silver));
        assert_eq!("red".parse::<Tier>().ok(), Some(Tier::Bronze));
        assert!("platinum".parse::<Tier>().is_err());
    }

    #[test]
    fn test_serialize_uses_legacy_labels() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Tier::Gold)?, r#""super-green""#);
        assert_eq!(serde_json::to_string(&Tier::Silver)?, r#""green""#);
        assert_eq!(serde_json::to_string(&Tier::Bronze)?, r#""red""#);
        Ok(())
    }

    #[test]
    fn test_deserialize_accepts_both_vocabularies() -> Result<(), serde_json::Error> {
        let tiers: Vec<Tier> = serde_json::from_str(r#"["gold", "green", "red", "Bronze"]"#)?;
        assert_eq!(tiers, vec![Tier::Gold, Tier::Silver, Tier::Bronze, Tier::Bronze]);
        assert!(serde_json::from_str::<Tier>(r#""purple""#).is_err());
        Ok(())
    }

    #[test]
    fn test_change_direction() {
        assert_eq!(TierChange::between(Tier::Bronze, Tier::Gold), TierChange::Upgrade);
        assert_eq!(TierChange::between(Tier::Gold, Tier::Bronze), TierChange::Downgrade);
        assert_eq!(TierChange::between(Tier::Silver, Tier::Silver), TierChange::None);
    }
}

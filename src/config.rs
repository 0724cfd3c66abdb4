//! Game tuning configuration.
//!
//! All gameplay constants live here so operators can rebalance without
//! recompiling: level-up curve, reputation tier thresholds, rival propagation
//! rate, crafting defaults. Values load from a TOML file with per-field
//! defaults, so a partial file (or no file at all) yields a playable setup.

use serde::{Deserialize, Serialize};

use crate::rpg::errors::GameError;
use crate::rpg::types::ReputationTier;

/// Tuning knobs for the gameplay core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// XP needed to leave level N is `N * xp_per_level_multiplier`.
    #[serde(default = "default_xp_per_level_multiplier")]
    pub xp_per_level_multiplier: u32,
    /// Max HP gained per level.
    #[serde(default = "default_level_up_hp_bonus")]
    pub level_up_hp_bonus: u32,
    /// Max mana gained per level.
    #[serde(default = "default_level_up_mana_bonus")]
    pub level_up_mana_bonus: u32,
    /// Enemies at or above this level satisfy "any boss" kill objectives.
    #[serde(default = "default_boss_level_threshold")]
    pub boss_level_threshold: u32,
    /// Rival factions receive `-amount / divisor` on every reputation gain.
    #[serde(default = "default_rival_reputation_divisor")]
    pub rival_reputation_divisor: i32,
    /// Value assigned to crafted consumables whose recipe omits one.
    #[serde(default = "default_crafted_item_value")]
    pub default_crafted_item_value: u32,
    /// Ascending reputation thresholds: Neutral, Friendly, Honored, Exalted.
    /// Anything below the first entry is Hostile.
    #[serde(default = "default_tier_thresholds")]
    pub tier_thresholds: TierThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierThresholds {
    pub neutral: i32,
    pub friendly: i32,
    pub honored: i32,
    pub exalted: i32,
}

fn default_xp_per_level_multiplier() -> u32 {
    100
}

fn default_level_up_hp_bonus() -> u32 {
    20
}

fn default_level_up_mana_bonus() -> u32 {
    10
}

fn default_boss_level_threshold() -> u32 {
    10
}

fn default_rival_reputation_divisor() -> i32 {
    2
}

fn default_crafted_item_value() -> u32 {
    50
}

fn default_tier_thresholds() -> TierThresholds {
    TierThresholds {
        neutral: 0,
        friendly: 100,
        honored: 500,
        exalted: 1000,
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            xp_per_level_multiplier: default_xp_per_level_multiplier(),
            level_up_hp_bonus: default_level_up_hp_bonus(),
            level_up_mana_bonus: default_level_up_mana_bonus(),
            boss_level_threshold: default_boss_level_threshold(),
            rival_reputation_divisor: default_rival_reputation_divisor(),
            default_crafted_item_value: default_crafted_item_value(),
            tier_thresholds: default_tier_thresholds(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file. Missing fields take defaults.
    pub fn load(path: &str) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GameError::InvalidSeedData {
            path: path.to_string(),
            detail: e.to_string(),
        })
    }

    /// XP threshold to advance out of `level`.
    pub fn xp_threshold(&self, level: u32) -> u32 {
        level * self.xp_per_level_multiplier
    }

    /// Map a reputation value to its tier. Pure and monotonic: a higher
    /// value never yields a lower tier.
    pub fn tier_for(&self, reputation: i32) -> ReputationTier {
        let t = &self.tier_thresholds;
        if reputation >= t.exalted {
            ReputationTier::Exalted
        } else if reputation >= t.honored {
            ReputationTier::Honored
        } else if reputation >= t.friendly {
            ReputationTier::Friendly
        } else if reputation >= t.neutral {
            ReputationTier::Neutral
        } else {
            ReputationTier::Hostile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_expected_curve() {
        let config = GameConfig::default();
        assert_eq!(config.xp_threshold(1), 100);
        assert_eq!(config.xp_threshold(7), 700);
        assert_eq!(config.level_up_hp_bonus, 20);
        assert_eq!(config.level_up_mana_bonus, 10);
        assert_eq!(config.default_crafted_item_value, 50);
    }

    #[test]
    fn tier_lookup_is_monotonic() {
        let config = GameConfig::default();
        let mut previous = config.tier_for(i32::MIN);
        for value in [-5000, -1, 0, 1, 99, 100, 499, 500, 999, 1000, 40000] {
            let tier = config.tier_for(value);
            assert!(tier >= previous, "tier regressed at reputation {}", value);
            previous = tier;
        }
    }

    #[test]
    fn tier_boundaries() {
        let config = GameConfig::default();
        assert_eq!(config.tier_for(-1), ReputationTier::Hostile);
        assert_eq!(config.tier_for(0), ReputationTier::Neutral);
        assert_eq!(config.tier_for(100), ReputationTier::Friendly);
        assert_eq!(config.tier_for(500), ReputationTier::Honored);
        assert_eq!(config.tier_for(1000), ReputationTier::Exalted);
    }

    #[test]
    fn partial_toml_takes_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "boss_level_threshold = 15").expect("write");
        let config =
            GameConfig::load(file.path().to_str().expect("utf-8 path")).expect("load");
        assert_eq!(config.boss_level_threshold, 15);
        assert_eq!(config.xp_per_level_multiplier, 100);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "boss_level_threshold = \"not a number\"").expect("write");
        let result = GameConfig::load(file.path().to_str().expect("utf-8 path"));
        assert!(result.is_err());
    }
}

//! Condition tuning configuration with documented constants
//!
//! All balance numbers for the condition tracker are collected here with
//! explanations of their purpose and how they interact with each other.
//! Values are loaded from TOML and validated before use.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WildError};

/// Tunables for the condition tracker
///
/// These values have been tuned so that an idle, unfed actor declines over
/// a couple of simulated weeks rather than hours. Changing them will affect
/// survival pacing and feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionConfig {
    // === NUTRITION ===
    /// Global multiplier on per-nutrient drain rates
    ///
    /// 1.0 = normal pacing. 0.0 disables nutrient decay entirely
    /// (useful for peaceful modes); 2.0 halves time-to-starvation.
    pub decay_modifier: f32,

    // === THIRST ===
    /// Global multiplier on passive thirst drain
    ///
    /// At 1.0 an idle actor loses 1 thirst point per 240 ticks, which
    /// empties the 100-point bar in one 24 000-tick day.
    pub thirst_modifier: f32,

    // === VITALITY ===
    /// Max vitality when combined condition is at or below the 10% floor
    ///
    /// The three anchors must be strictly ordered min < base < max;
    /// `validate` enforces this.
    pub min_vitality: f32,

    /// Max vitality when combined condition sits exactly at 40%
    pub base_vitality: f32,

    /// Max vitality at full condition (100%)
    pub max_vitality: f32,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            decay_modifier: 1.0,
            thirst_modifier: 1.0,
            min_vitality: 10.0,
            base_vitality: 20.0,
            max_vitality: 40.0,
        }
    }
}

impl ConditionConfig {
    /// Check internal consistency of the tunables
    ///
    /// The vitality interpolation divides by anchor differences, so the
    /// anchors must be strictly ordered.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_vitality < self.base_vitality && self.base_vitality < self.max_vitality) {
            return Err(WildError::InvalidConfig(format!(
                "vitality anchors must be strictly ordered min < base < max, got {} / {} / {}",
                self.min_vitality, self.base_vitality, self.max_vitality
            )));
        }
        if self.decay_modifier < 0.0 {
            return Err(WildError::InvalidConfig(format!(
                "decay_modifier must be non-negative, got {}",
                self.decay_modifier
            )));
        }
        if self.thirst_modifier < 0.0 {
            return Err(WildError::InvalidConfig(format!(
                "thirst_modifier must be non-negative, got {}",
                self.thirst_modifier
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!("Loaded condition config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    ///
    /// Missing keys keep their default values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: ConditionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

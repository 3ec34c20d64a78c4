use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// First candidate of the default sweep.
pub const DEFAULT_SWEEP_START: u64 = 4_000_000_000;
/// `4_000_000_000..=4_064_100_000`
pub const DEFAULT_SWEEP_COUNT: u64 = 64_100_001;

/// Which end of the 9-digit base receives the weight of 10 in the weighted sum.
/// The other end receives 2.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightOrder {
    /// The digit just before the check digit is weighted 10, the leading digit 2.
    #[default]
    LeastSignificantFirst,
    /// The leading digit is weighted 10, the digit just before the check digit 2.
    /// This is the order published in the NHS data dictionary.
    MostSignificantFirst,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ValidatorConfig {
    pub weight_order: WeightOrder,
}

impl ValidatorConfig {
    pub fn weight_order(&self, weight_order: WeightOrder) -> Self {
        self.mutate_clone(|x| x.weight_order = weight_order)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// How the sweep renders each number before handing it to the validator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeparatorStyle {
    /// `4000000003`
    #[default]
    None,
    /// `400 000 0003`
    Spaced,
    /// `400-000-0003`
    Hyphenated,
}

impl SeparatorStyle {
    pub(crate) fn separator(&self) -> Option<char> {
        match self {
            SeparatorStyle::None => None,
            SeparatorStyle::Spaced => Some(' '),
            SeparatorStyle::Hyphenated => Some('-'),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The sweep must check at least one candidate")]
    EmptyRange,

    #[error("The sweep range starting at {start} with {count} candidates overflows")]
    RangeOverflow { start: u64, count: u64 },

    #[error("Invalid sweep config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SweepConfig {
    pub start: u64,
    pub count: u64,
    pub parallel: bool,
    pub separator_style: SeparatorStyle,
    pub validator: ValidatorConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_SWEEP_START,
            count: DEFAULT_SWEEP_COUNT,
            parallel: false,
            separator_style: SeparatorStyle::None,
            validator: ValidatorConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn new(start: u64, count: u64) -> Self {
        Self {
            start,
            count,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn start(&self, start: u64) -> Self {
        self.mutate_clone(|x| x.start = start)
    }

    pub fn count(&self, count: u64) -> Self {
        self.mutate_clone(|x| x.count = count)
    }

    pub fn parallel(&self, parallel: bool) -> Self {
        self.mutate_clone(|x| x.parallel = parallel)
    }

    pub fn separator_style(&self, separator_style: SeparatorStyle) -> Self {
        self.mutate_clone(|x| x.separator_style = separator_style)
    }

    pub fn validator(&self, validator: ValidatorConfig) -> Self {
        self.mutate_clone(|x| x.validator = validator)
    }

    /// The half-open range of numbers this sweep checks.
    pub fn range(&self) -> Result<std::ops::Range<u64>, ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyRange);
        }
        let end = self
            .start
            .checked_add(self.count)
            .ok_or(ConfigError::RangeOverflow {
                start: self.start,
                count: self.count,
            })?;
        Ok(self.start..end)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

//! Mining configuration: tolerance, support threshold and algorithm choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EPSILON, DEFAULT_MIN_FREQ, DEFAULT_STEP};
use crate::errors::ConfigError;
use crate::types::CountSemantics;

/// Candidate generation algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Grid enumeration of window origins. Slow; used as an oracle.
    SlidingWindow,
    /// Event sweep over window-origin space.
    #[default]
    SweepLine,
}

/// Instance grouping strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// All pairs against each representative.
    Naive,
    /// Pairwise with a bucketed-offset pre-filter.
    Signature,
    /// Type-signature buckets, each indexed by a VP-tree.
    #[default]
    Tree,
}

/// Axis whose offsets feed the signature pre-filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureAxis {
    X,
    #[default]
    Y,
}

impl GeneratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SlidingWindow => "sliding_window",
            Self::SweepLine => "sweep_line",
        }
    }
}

impl GroupingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Signature => "signature",
            Self::Tree => "tree",
        }
    }
}

impl SignatureAxis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for GroupingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sliding_window" | "grid" | "baseline" => Ok(Self::SlidingWindow),
            "sweep_line" | "sweep" => Ok(Self::SweepLine),
            other => Err(ConfigError::InvalidValue {
                field: "mining.generator".to_string(),
                message: format!("unknown generator '{other}'"),
            }),
        }
    }
}

impl FromStr for GroupingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "signature" => Ok(Self::Signature),
            "tree" | "vp_tree" => Ok(Self::Tree),
            other => Err(ConfigError::InvalidValue {
                field: "mining.grouping".to_string(),
                message: format!("unknown grouping strategy '{other}'"),
            }),
        }
    }
}

/// Configuration for one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Per-axis positional tolerance. Default: 0.05.
    pub epsilon: Option<f64>,
    /// Minimum support for a reported pattern. Default: 5.
    pub min_freq: Option<u32>,
    /// Grid step for the sliding-window generator. Default: 1.0.
    pub step: Option<f64>,
    /// Window validity rule. Default: at_least.
    pub count_semantics: Option<CountSemantics>,
    /// Candidate generator. Default: sweep_line.
    pub generator: Option<GeneratorKind>,
    /// Grouping strategy. Default: tree.
    pub grouping: Option<GroupingStrategy>,
    /// Signature pre-filter axis. Default: y.
    pub signature_axis: Option<SignatureAxis>,
}

impl MiningConfig {
    pub fn effective_epsilon(&self) -> f64 {
        self.epsilon.unwrap_or(DEFAULT_EPSILON)
    }

    pub fn effective_min_freq(&self) -> u32 {
        self.min_freq.unwrap_or(DEFAULT_MIN_FREQ)
    }

    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(DEFAULT_STEP)
    }

    pub fn effective_count_semantics(&self) -> CountSemantics {
        self.count_semantics.unwrap_or_default()
    }

    pub fn effective_generator(&self) -> GeneratorKind {
        self.generator.unwrap_or_default()
    }

    pub fn effective_grouping(&self) -> GroupingStrategy {
        self.grouping.unwrap_or_default()
    }

    pub fn effective_signature_axis(&self) -> SignatureAxis {
        self.signature_axis.unwrap_or_default()
    }

    /// Reject values the miner cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let epsilon = self.effective_epsilon();
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.epsilon".to_string(),
                message: format!("must be a finite number >= 0, got {epsilon}"),
            });
        }
        if self.effective_min_freq() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.min_freq".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let step = self.effective_step();
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.step".to_string(),
                message: format!("must be a finite number > 0, got {step}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MiningConfig::default();
        assert_eq!(config.effective_epsilon(), DEFAULT_EPSILON);
        assert_eq!(config.effective_min_freq(), DEFAULT_MIN_FREQ);
        assert_eq!(config.effective_generator(), GeneratorKind::SweepLine);
        assert_eq!(config.effective_grouping(), GroupingStrategy::Tree);
        assert_eq!(config.effective_signature_axis(), SignatureAxis::Y);
        assert_eq!(config.effective_count_semantics(), CountSemantics::AtLeast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_epsilon() {
        let config = MiningConfig {
            epsilon: Some(-0.1),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "mining.epsilon"));
    }

    #[test]
    fn rejects_zero_min_freq_and_step() {
        let config = MiningConfig {
            min_freq: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = MiningConfig {
            step: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_epsilon_is_valid() {
        let config = MiningConfig {
            epsilon: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn names_parse_back() {
        for kind in [GeneratorKind::SlidingWindow, GeneratorKind::SweepLine] {
            assert_eq!(kind.name().parse::<GeneratorKind>().unwrap(), kind);
        }
        for strategy in [
            GroupingStrategy::Naive,
            GroupingStrategy::Signature,
            GroupingStrategy::Tree,
        ] {
            assert_eq!(strategy.name().parse::<GroupingStrategy>().unwrap(), strategy);
        }
    }
}

//! Sketches, count semantics and keyword multisets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::identifiers::KeywordId;
use super::point::Point;
use crate::errors::{ConfigError, MiningError};

/// Target window dimensions plus the keyword composition a window must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// Window width.
    pub a: f64,
    /// Window height.
    pub b: f64,
    /// Keyword → required count. Zero counts are ignored.
    pub required: BTreeMap<KeywordId, u32>,
}

impl Sketch {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            required: BTreeMap::new(),
        }
    }

    /// Builder: require `count` points of `keyword`.
    pub fn with_requirement(mut self, keyword: KeywordId, count: u32) -> Self {
        if count == 0 {
            self.required.remove(&keyword);
        } else {
            self.required.insert(keyword, count);
        }
        self
    }

    /// Non-zero requirements in ascending keyword order.
    pub fn requirements(&self) -> impl Iterator<Item = (KeywordId, u32)> + '_ {
        self.required
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&k, &c)| (k, c))
    }

    /// Required count for `keyword` (0 if not required).
    #[inline]
    pub fn required_count(&self, keyword: KeywordId) -> u32 {
        self.required.get(&keyword).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_relevant(&self, keyword: KeywordId) -> bool {
        self.required_count(keyword) > 0
    }

    /// A sketch with no requirement yields no instances.
    pub fn is_empty(&self) -> bool {
        self.requirements().next().is_none()
    }

    /// Total slots of one instance.
    pub fn slot_total(&self) -> usize {
        self.requirements().map(|(_, c)| c as usize).sum()
    }

    /// Reject non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<(), MiningError> {
        for (field, value) in [("a", self.a), ("b", self.b)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MiningError::InvalidSketch {
                    field: field.to_string(),
                    message: format!("must be a positive finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// How a window's keyword counts are compared to a sketch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountSemantics {
    /// Each required keyword appears at least the required number of times.
    /// Other keywords may be present.
    #[default]
    AtLeast,
    /// The window's full keyword multiset equals the requirement.
    Exact,
}

impl CountSemantics {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AtLeast => "at_least",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for CountSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CountSemantics {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "at_least" | "atleast" | "minimum" => Ok(Self::AtLeast),
            "exact" => Ok(Self::Exact),
            other => Err(ConfigError::InvalidValue {
                field: "mining.count_semantics".to_string(),
                message: format!("unknown count semantics '{other}'"),
            }),
        }
    }
}

/// Keyword multiset. Keywords whose count drops to zero are removed, so two
/// multisets compare equal exactly when they hold the same counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeywordCounts(BTreeMap<KeywordId, u32>);

impl KeywordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut counts = Self::new();
        for p in points {
            counts.increment(p.keyword);
        }
        counts
    }

    pub fn from_keywords(keywords: impl IntoIterator<Item = KeywordId>) -> Self {
        let mut counts = Self::new();
        for k in keywords {
            counts.increment(k);
        }
        counts
    }

    #[inline]
    pub fn increment(&mut self, keyword: KeywordId) {
        *self.0.entry(keyword).or_insert(0) += 1;
    }

    /// Decrement, removing the keyword at zero. Decrementing an absent
    /// keyword is a no-op.
    pub fn decrement(&mut self, keyword: KeywordId) {
        if let Some(count) = self.0.get_mut(&keyword) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(&keyword);
            }
        }
    }

    #[inline]
    pub fn get(&self, keyword: KeywordId) -> u32 {
        self.0.get(&keyword).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeywordId, u32)> + '_ {
        self.0.iter().map(|(&k, &c)| (k, c))
    }

    /// Whether a window holding these counts is valid for `sketch`.
    pub fn satisfies(&self, sketch: &Sketch, semantics: CountSemantics) -> bool {
        match semantics {
            CountSemantics::AtLeast => sketch.requirements().all(|(k, c)| self.get(k) >= c),
            CountSemantics::Exact => {
                sketch.requirements().all(|(k, c)| self.get(k) == c)
                    && self.iter().all(|(k, c)| sketch.required_count(k) == c)
            }
        }
    }
}

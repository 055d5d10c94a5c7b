//! Instance matcher: keyword-preserving, position-tolerant bijections.

use std::collections::BTreeMap;

use colomine_core::constants::{DIMENSION_TOLERANCE, ORDER_TOLERANCE};
use colomine_core::errors::ConfigError;
use colomine_core::types::collections::{SmallVec4, SmallVec8};
use colomine_core::types::{FrequentPattern, Instance, KeywordId, SlotLayout};

use super::kuhn::{perfect_matching, Adjacency};

/// Slot bijection between two layouts: slot `i` of the first maps to slot
/// `mapping[i]` of the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping(Vec<usize>);

impl Mapping {
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.0[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The reverse bijection.
    pub fn inverse(&self) -> Mapping {
        let mut inverse = vec![0; self.0.len()];
        for (i, &j) in self.0.iter().enumerate() {
            inverse[j] = i;
        }
        Mapping(inverse)
    }
}

/// Decides whether two layouts are the same arrangement within `epsilon`.
///
/// Matched slots share a keyword and their offsets from their own window
/// centres differ by at most `epsilon` on each axis. Comparisons carry
/// [`ORDER_TOLERANCE`] of slack so exact translates match at `epsilon = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceMatcher {
    epsilon: f64,
}

impl InstanceMatcher {
    /// Rejects negative or non-finite tolerances.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "mining.epsilon".to_string(),
                message: format!("must be a finite number >= 0, got {epsilon}"),
            });
        }
        Ok(Self { epsilon })
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Find a slot bijection from `p` to `q`, if one exists.
    pub fn find_mapping<P, Q>(&self, p: &P, q: &Q) -> Option<Mapping>
    where
        P: SlotLayout + ?Sized,
        Q: SlotLayout + ?Sized,
    {
        if !same_dimensions(p, q) || p.slot_count() != q.slot_count() {
            return None;
        }

        let mut classes: BTreeMap<KeywordId, (SmallVec8<usize>, SmallVec8<usize>)> =
            BTreeMap::new();
        for i in 0..p.slot_count() {
            classes.entry(p.slot_keyword(i)).or_default().0.push(i);
        }
        for j in 0..q.slot_count() {
            classes.entry(q.slot_keyword(j)).or_default().1.push(j);
        }
        if classes.values().any(|(ps, qs)| ps.len() != qs.len()) {
            return None;
        }

        let mut mapping = vec![usize::MAX; p.slot_count()];
        for (ps, qs) in classes.values() {
            let adjacency: Adjacency = ps
                .iter()
                .map(|&i| {
                    let offset = p.anchor_offset(i);
                    qs.iter()
                        .enumerate()
                        .filter(|&(_, &j)| self.within(offset, q.anchor_offset(j)))
                        .map(|(local, _)| local)
                        .collect::<SmallVec4<usize>>()
                })
                .collect();
            let matched = perfect_matching(&adjacency, qs.len())?;
            for (local_p, local_q) in matched.into_iter().enumerate() {
                mapping[ps[local_p]] = qs[local_q];
            }
        }
        Some(Mapping(mapping))
    }

    #[inline]
    pub fn matches<P, Q>(&self, p: &P, q: &Q) -> bool
    where
        P: SlotLayout + ?Sized,
        Q: SlotLayout + ?Sized,
    {
        self.find_mapping(p, q).is_some()
    }

    /// Whether `instance` realizes `pattern` within tolerance.
    pub fn is_instance_of(&self, instance: &Instance, pattern: &FrequentPattern) -> bool {
        self.matches(pattern, instance)
    }

    /// Whether `mapping` is a keyword-preserving, in-tolerance bijection
    /// from `p` to `q`.
    pub fn validates<P, Q>(&self, p: &P, q: &Q, mapping: &Mapping) -> bool
    where
        P: SlotLayout + ?Sized,
        Q: SlotLayout + ?Sized,
    {
        let n = p.slot_count();
        if !same_dimensions(p, q) || q.slot_count() != n || mapping.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for i in 0..n {
            let j = mapping.get(i);
            if j >= n || seen[j] {
                return false;
            }
            seen[j] = true;
            if p.slot_keyword(i) != q.slot_keyword(j)
                || !self.within(p.anchor_offset(i), q.anchor_offset(j))
            {
                return false;
            }
        }
        true
    }

    #[inline]
    fn within(&self, (px, py): (f64, f64), (qx, qy): (f64, f64)) -> bool {
        let limit = self.epsilon + ORDER_TOLERANCE;
        (px - qx).abs() <= limit && (py - qy).abs() <= limit
    }
}

#[inline]
fn same_dimensions<P, Q>(p: &P, q: &Q) -> bool
where
    P: SlotLayout + ?Sized,
    Q: SlotLayout + ?Sized,
{
    (p.width() - q.width()).abs() <= DIMENSION_TOLERANCE
        && (p.height() - q.height()).abs() <= DIMENSION_TOLERANCE
}

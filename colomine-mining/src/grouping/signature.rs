//! Signature-pruned pairwise grouping.

use colomine_core::config::SignatureAxis;
use colomine_core::constants::ORDER_TOLERANCE;
use colomine_core::types::collections::SmallVec8;
use colomine_core::types::Instance;

use super::{canonicalize, GroupedPattern, GroupingOutcome, GroupingStats, PatternGrouper};
use crate::matching::InstanceMatcher;

/// Coarse per-slot bucket indices, compared before the full matcher runs.
pub type Signature = SmallVec8<i64>;

/// Naive grouping behind a necessary-condition filter.
///
/// A slot's signature entry is its offset from the instance's minimum
/// offset along `axis`, floor-divided by `2·epsilon`. Within a keyword run
/// the entries are sorted, so two matching instances pair slots whose
/// offsets differ by at most `2·epsilon`: bucket indices differ by at most
/// one. With `epsilon = 0` the filter is off.
#[derive(Debug, Clone, Copy)]
pub struct SignatureGrouper {
    matcher: InstanceMatcher,
    axis: SignatureAxis,
}

impl SignatureGrouper {
    pub fn new(matcher: InstanceMatcher, axis: SignatureAxis) -> Self {
        Self { matcher, axis }
    }

    /// Signature of a canonicalized instance, `None` when bucketing is off.
    pub fn signature(&self, instance: &Instance) -> Option<Signature> {
        let epsilon = self.matcher.epsilon();
        if epsilon <= 0.0 {
            return None;
        }
        let width = 2.0 * (epsilon + ORDER_TOLERANCE);
        let offset = |i: usize| match self.axis {
            SignatureAxis::X => instance.slots[i].rel_x,
            SignatureAxis::Y => instance.slots[i].rel_y,
        };
        let min = (0..instance.len())
            .map(offset)
            .fold(f64::INFINITY, f64::min);

        let mut signature: Signature = (0..instance.len())
            .map(|i| ((offset(i) - min) / width).floor() as i64)
            .collect();

        // Canonical order sorts y within each keyword run; x needs it here.
        if self.axis == SignatureAxis::X {
            let mut start = 0;
            while start < instance.len() {
                let keyword = instance.slots[start].point.keyword;
                let mut end = start + 1;
                while end < instance.len() && instance.slots[end].point.keyword == keyword {
                    end += 1;
                }
                signature[start..end].sort_unstable();
                start = end;
            }
        }
        Some(signature)
    }
}

/// Equal length and every bucket within one of its counterpart.
pub fn compatible(s: &Signature, t: &Signature) -> bool {
    s.len() == t.len() && s.iter().zip(t.iter()).all(|(a, b)| (a - b).abs() <= 1)
}

impl PatternGrouper for SignatureGrouper {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn group(&self, instances: Vec<Instance>) -> GroupingOutcome {
        let instances = canonicalize(instances);
        let signatures: Vec<Option<Signature>> =
            instances.iter().map(|inst| self.signature(inst)).collect();
        let mut stats = GroupingStats {
            instances: instances.len(),
            ..Default::default()
        };
        let mut consumed = vec![false; instances.len()];
        let mut groups = Vec::new();

        for i in 0..instances.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let mut group = GroupedPattern::new(instances[i].clone());
            for j in (i + 1)..instances.len() {
                if consumed[j] {
                    continue;
                }
                if let (Some(si), Some(sj)) = (&signatures[i], &signatures[j]) {
                    if !compatible(si, sj) {
                        stats.pruned_pairs += 1;
                        continue;
                    }
                }
                stats.matcher_calls += 1;
                if let Some(mapping) = self.matcher.find_mapping(&group.representative, &instances[j]) {
                    group.absorb(&instances[j], &mapping);
                    consumed[j] = true;
                }
            }
            groups.push(group);
        }

        stats.groups = groups.len();
        GroupingOutcome { groups, stats }
    }
}

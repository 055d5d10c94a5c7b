//! Vantage-point tree over relative displacement vectors.
//!
//! Nodes live in a flat arena addressed by [`VpNodeId`]; children are
//! indices, so dropping or truncating the arena releases the whole tree.
//! Distances are Chebyshev (L∞).

use colomine_core::types::collections::SmallVec8;

/// Relative displacement vector: per-slot y offset from the first slot.
pub type Rdv = SmallVec8<f64>;

/// Dense index of a node in its tree's arena.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VpNodeId(u32);

impl VpNodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct VpNode {
    center: Rdv,
    /// Partition radius: the near subtree holds points at distance ≤ `mu`,
    /// the far subtree points at distance ≥ `mu`. Zero while a leaf.
    mu: f64,
    pattern: usize,
    near: Option<VpNodeId>,
    far: Option<VpNodeId>,
}

impl VpNode {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.near.is_none() && self.far.is_none()
    }
}

/// Index from RDVs to pattern indices.
#[derive(Debug, Clone, Default)]
pub struct VpTree {
    nodes: Vec<VpNode>,
}

impl VpTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Insert `center` labelled with `pattern`.
    ///
    /// The first point becomes the root. Further points descend near when
    /// closer than `mu` and far otherwise; a leaf reached on the way takes
    /// the new point's distance as its `mu` and the point as its near child.
    pub fn insert(&mut self, center: Rdv, pattern: usize) {
        let new_id = VpNodeId(self.nodes.len() as u32);
        if !self.nodes.is_empty() {
            let mut current = VpNodeId(0);
            loop {
                let node = &mut self.nodes[current.index()];
                let d = chebyshev(&node.center, &center);
                if node.is_leaf() {
                    node.mu = d;
                    node.near = Some(new_id);
                    break;
                }
                let child = if d < node.mu {
                    &mut node.near
                } else {
                    &mut node.far
                };
                match *child {
                    Some(next) => current = next,
                    None => {
                        *child = Some(new_id);
                        break;
                    }
                }
            }
        }
        self.nodes.push(VpNode {
            center,
            mu: 0.0,
            pattern,
            near: None,
            far: None,
        });
    }

    /// Patterns whose center lies within `threshold` of `query`, in
    /// ascending pattern order.
    ///
    /// Subtrees are pruned by the triangle inequality: the near side can
    /// only hold a hit when `d - threshold <= mu`, the far side when
    /// `d + threshold >= mu`. Near is visited before far.
    pub fn within(&self, query: &[f64], threshold: f64) -> Vec<usize> {
        let mut hits = Vec::new();
        if self.nodes.is_empty() {
            return hits;
        }
        let mut stack = vec![VpNodeId(0)];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            let d = chebyshev(&node.center, query);
            if d <= threshold {
                hits.push(node.pattern);
            }
            if let Some(far) = node.far {
                if d + threshold >= node.mu {
                    stack.push(far);
                }
            }
            if let Some(near) = node.near {
                if d - threshold <= node.mu {
                    stack.push(near);
                }
            }
        }
        hits.sort_unstable();
        hits
    }
}

/// L∞ distance. Vectors of different length are infinitely far apart.
pub fn chebyshev(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rdv(values: &[f64]) -> Rdv {
        values.iter().copied().collect()
    }

    #[test]
    fn chebyshev_is_max_abs() {
        assert_eq!(chebyshev(&[0.0, 1.0, -2.0], &[0.5, 1.0, 1.0]), 3.0);
        assert_eq!(chebyshev(&[], &[]), 0.0);
        assert!(chebyshev(&[0.0], &[0.0, 1.0]).is_infinite());
    }

    #[test]
    fn leaf_takes_first_child_as_near() {
        let mut tree = VpTree::new();
        tree.insert(rdv(&[0.0, 0.0]), 0);
        tree.insert(rdv(&[0.0, 0.5]), 1);
        assert_eq!(tree.nodes[0].mu, 0.5);
        assert_eq!(tree.nodes[0].near, Some(VpNodeId(1)));
        // Farther than mu goes far.
        tree.insert(rdv(&[0.0, 2.0]), 2);
        assert_eq!(tree.nodes[0].far, Some(VpNodeId(2)));
        // Closer than mu descends near, turning node 1 into an inner node.
        tree.insert(rdv(&[0.0, 0.1]), 3);
        assert_eq!(tree.nodes[1].near, Some(VpNodeId(3)));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn within_agrees_with_linear_scan() {
        let mut tree = VpTree::new();
        let mut points = Vec::new();
        for i in 0..200u32 {
            // Deterministic spread in [0, 4).
            let a = f64::from((i * 37) % 101) / 25.0;
            let b = f64::from((i * 91) % 97) / 24.0;
            points.push(rdv(&[a, b]));
            tree.insert(rdv(&[a, b]), i as usize);
        }
        for q in 0..50u32 {
            let query = [f64::from(q % 17) / 4.0, f64::from(q % 13) / 3.0];
            for threshold in [0.0, 0.1, 0.3, 1.0] {
                let expected: Vec<usize> = points
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| chebyshev(p, &query) <= threshold)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(tree.within(&query, threshold), expected);
            }
        }
    }

    #[test]
    fn clear_releases_nodes() {
        let mut tree = VpTree::new();
        tree.insert(rdv(&[1.0]), 0);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.within(&[1.0], 10.0).is_empty());
    }
}

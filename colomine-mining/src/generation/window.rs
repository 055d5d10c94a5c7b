//! Window queries and greedy disjoint instance extraction.

use std::collections::BTreeMap;

use colomine_core::types::{
    CountSemantics, Instance, KeywordCounts, Point, PointId, Sketch, SpatialCatalog,
};

/// Which window edges count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEdges {
    /// `[x0, x0 + a] × [y0, y0 + b]`
    Closed,
    /// `(x0, x0 + a] × (y0, y0 + b]`, evaluated in origin space as
    /// `p - size <= origin < p` per axis.
    OpenMin,
}

/// An `a × b` query rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x0: f64,
    pub y0: f64,
    pub a: f64,
    pub b: f64,
    pub edges: WindowEdges,
}

impl Window {
    pub fn closed(x0: f64, y0: f64, a: f64, b: f64) -> Self {
        Self {
            x0,
            y0,
            a,
            b,
            edges: WindowEdges::Closed,
        }
    }

    pub fn open_min(x0: f64, y0: f64, a: f64, b: f64) -> Self {
        Self {
            x0,
            y0,
            a,
            b,
            edges: WindowEdges::OpenMin,
        }
    }

    #[inline]
    fn contains_y(&self, y: f64) -> bool {
        match self.edges {
            WindowEdges::Closed => y >= self.y0 && y <= self.y0 + self.b,
            WindowEdges::OpenMin => self.y0 < y && y - self.b <= self.y0,
        }
    }

    /// Catalog points inside the window, in catalog order.
    pub fn collect<'c>(&self, catalog: &'c SpatialCatalog) -> Vec<&'c Point> {
        let range = match self.edges {
            WindowEdges::Closed => catalog.x_range_closed(self.x0, self.x0 + self.a),
            WindowEdges::OpenMin => catalog.x_range_covering(self.x0, self.a),
        };
        catalog.points()[range]
            .iter()
            .filter(|p| self.contains_y(p.y))
            .collect()
    }
}

/// Extract as many disjoint instances as the window supports and append
/// them to `out`. Returns the number extracted.
///
/// Nothing is extracted unless the window's keyword counts satisfy the
/// sketch under `semantics`. Each round takes, per required keyword in
/// ascending order, the first unused points of that keyword in catalog
/// order; the first under-supplied keyword ends extraction.
pub fn extract_instances(
    catalog: &SpatialCatalog,
    sketch: &Sketch,
    semantics: CountSemantics,
    window: &Window,
    out: &mut Vec<Instance>,
) -> usize {
    let points = window.collect(catalog);
    if !KeywordCounts::from_points(points.iter().copied()).satisfies(sketch, semantics) {
        return 0;
    }

    let mut used = vec![false; points.len()];
    let mut picked: Vec<usize> = Vec::with_capacity(sketch.slot_total());
    let mut extracted = 0;

    'rounds: loop {
        picked.clear();
        for (keyword, count) in sketch.requirements() {
            let before = picked.len();
            picked.extend(
                points
                    .iter()
                    .enumerate()
                    .filter(|(i, p)| !used[*i] && p.keyword == keyword)
                    .map(|(i, _)| i)
                    .take(count as usize),
            );
            if picked.len() - before < count as usize {
                break 'rounds;
            }
        }
        for &i in &picked {
            used[i] = true;
        }
        out.push(Instance::new(
            window.a,
            window.b,
            window.x0,
            window.y0,
            picked.iter().map(|&i| *points[i]),
        ));
        extracted += 1;
    }

    extracted
}

/// Drop instances whose point-id set was already seen (first occurrence
/// wins) and order the survivors by their sorted id vector.
pub fn dedup_instances(instances: Vec<Instance>) -> Vec<Instance> {
    let mut unique: BTreeMap<Vec<PointId>, Instance> = BTreeMap::new();
    for instance in instances {
        unique.entry(instance.sorted_ids()).or_insert(instance);
    }
    unique.into_values().collect()
}

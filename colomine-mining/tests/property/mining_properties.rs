//! Property tests for colomine-mining: generator agreement, grouping
//! agreement, matcher symmetry, and support monotonicity.

use std::collections::BTreeSet;

use proptest::prelude::*;

use colomine_core::config::SignatureAxis;
use colomine_core::types::{CountSemantics, Instance, Point, PointId, Sketch, SpatialCatalog};
use colomine_mining::generation::{dedup_instances, extract_instances, CandidateGenerator, Window};
use colomine_mining::grouping::{GroupingOutcome, PatternGrouper};
use colomine_mining::{
    FrequencyFilter, InstanceMatcher, NaiveGrouper, SignatureGrouper, SlidingWindowGenerator,
    SweepLineGenerator, TreeGrouper,
};

const A: u32 = 1;
const B: u32 = 2;
const PAD: u32 = 99;

/// One cluster of exactly {A, A, B} per chosen cell of a 4×4 grid with
/// 3-unit spacing. Jitter keeps every cluster inside a 0.5 box, so clusters
/// never share a 1×1 window.
fn clustered_catalog(cells: &BTreeSet<(u8, u8)>, jitter: &[(u8, u8)]) -> SpatialCatalog {
    let mut points = vec![
        Point::new(10_000, 0.0, 0.0, PAD),
        Point::new(10_001, 13.0, 13.0, PAD),
    ];
    let mut next_id: PointId = 1;
    for (c, &(i, j)) in cells.iter().enumerate() {
        let (cx, cy) = (3.0 * i as f64 + 1.0, 3.0 * j as f64 + 1.0);
        for (k, keyword) in [A, A, B].into_iter().enumerate() {
            let (jx, jy) = jitter[(3 * c + k) % jitter.len()];
            points.push(Point::new(
                next_id,
                cx + jx as f64 * 0.1,
                cy + jy as f64 * 0.1,
                keyword,
            ));
            next_id += 1;
        }
    }
    SpatialCatalog::new(points)
}

fn aab_sketch() -> Sketch {
    Sketch::new(1.0, 1.0)
        .with_requirement(A, 2)
        .with_requirement(B, 1)
}

fn id_sets(instances: &[Instance]) -> Vec<Vec<PointId>> {
    instances.iter().map(Instance::sorted_ids).collect()
}

proptest! {
    #[test]
    fn prop_generators_agree_on_separated_clusters(
        cells in prop::collection::btree_set((0u8..4, 0u8..4), 1..6),
        jitter in prop::collection::vec((0u8..5, 0u8..5), 3..12),
        exact in any::<bool>(),
    ) {
        let catalog = clustered_catalog(&cells, &jitter);
        let semantics = if exact { CountSemantics::Exact } else { CountSemantics::AtLeast };
        let sliding = SlidingWindowGenerator::new(0.25, semantics).generate(&catalog, &aab_sketch());
        let sweep = SweepLineGenerator::new(semantics).generate(&catalog, &aab_sketch());

        prop_assert_eq!(sliding.len(), cells.len());
        prop_assert_eq!(id_sets(&sliding), id_sets(&sweep));
    }
}

/// Extraction at every origin where window content can change: corners
/// `{p.x - a, p.x} × {p.y - b, p.y}` of every point.
fn critical_origin_instances(
    catalog: &SpatialCatalog,
    sketch: &Sketch,
    semantics: CountSemantics,
) -> Vec<Instance> {
    let xs: Vec<f64> = catalog.points().iter().flat_map(|p| [p.x - sketch.a, p.x]).collect();
    let ys: Vec<f64> = catalog.points().iter().flat_map(|p| [p.y - sketch.b, p.y]).collect();
    let mut raw = Vec::new();
    for &x0 in &xs {
        for &y0 in &ys {
            let window = Window::open_min(x0, y0, sketch.a, sketch.b);
            extract_instances(catalog, sketch, semantics, &window, &mut raw);
        }
    }
    dedup_instances(raw)
}

proptest! {
    #[test]
    fn prop_sweep_matches_critical_origin_enumeration(
        coords in prop::collection::vec((0u8..8, 0u8..8, 0u32..3), 1..12),
        a_steps in 1u8..5,
        b_steps in 1u8..5,
        exact in any::<bool>(),
    ) {
        // Tenth-unit grid: sizes and coordinates coincide modulo `a` only up
        // to float rounding.
        let catalog: SpatialCatalog = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y, keyword))| Point::new(i as PointId, x as f64 * 0.1, y as f64 * 0.1, keyword))
            .collect();
        let sketch = Sketch::new(0.1 * a_steps as f64, 0.1 * b_steps as f64)
            .with_requirement(0, 1)
            .with_requirement(1, 1);
        let semantics = if exact { CountSemantics::Exact } else { CountSemantics::AtLeast };

        let sweep = SweepLineGenerator::new(semantics).generate(&catalog, &sketch);
        let expected = critical_origin_instances(&catalog, &sketch, semantics);
        prop_assert_eq!(id_sets(&sweep), id_sets(&expected));
    }
}

/// An instance of keyword layout `keywords` with offsets on a 0.03 grid.
fn grid_instance(first_id: PointId, keywords: &[u32], cells: &[(u8, u8)]) -> Instance {
    let points = keywords.iter().zip(cells).enumerate().map(|(k, (&keyword, &(cx, cy)))| {
        Point::new(first_id + k as PointId, 0.2 + cx as f64 * 0.03, 0.2 + cy as f64 * 0.03, keyword)
    });
    Instance::new(1.0, 1.0, 0.0, 0.0, points)
}

fn instance_strategy() -> impl Strategy<Value = (bool, Vec<(u8, u8)>)> {
    (any::<bool>(), prop::collection::vec((0u8..4, 0u8..4), 3))
}

fn build_instances(specs: &[(bool, Vec<(u8, u8)>)]) -> Vec<Instance> {
    specs
        .iter()
        .enumerate()
        .map(|(n, (layout, cells))| {
            let keywords: &[u32] = if *layout { &[A, A, B] } else { &[A, B, B] };
            grid_instance(3 * n as PointId + 1, keywords, cells)
        })
        .collect()
}

/// Partition fingerprint: representative ids, members, per-slot support ids.
fn partition(outcome: &GroupingOutcome) -> Vec<(Vec<PointId>, usize, Vec<BTreeSet<PointId>>)> {
    outcome
        .groups
        .iter()
        .map(|g| (g.representative.sorted_ids(), g.members, g.support_ids.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_grouping_strategies_agree(
        specs in prop::collection::vec(instance_strategy(), 1..30),
        eps_step in 0u8..4,
    ) {
        let matcher = InstanceMatcher::new(eps_step as f64 * 0.02).unwrap();
        let instances = build_instances(&specs);

        let naive = NaiveGrouper::new(matcher).group(instances.clone());
        let by_y = SignatureGrouper::new(matcher, SignatureAxis::Y).group(instances.clone());
        let by_x = SignatureGrouper::new(matcher, SignatureAxis::X).group(instances.clone());
        let tree = TreeGrouper::new(matcher).group(instances);

        let expected = partition(&naive);
        prop_assert_eq!(&partition(&by_y), &expected);
        prop_assert_eq!(&partition(&by_x), &expected);
        prop_assert_eq!(&partition(&tree), &expected);
        prop_assert!(tree.stats.matcher_calls <= naive.stats.matcher_calls);
    }

    #[test]
    fn prop_matcher_is_symmetric(
        p in instance_strategy(),
        q in instance_strategy(),
        eps_step in 0u8..4,
    ) {
        let matcher = InstanceMatcher::new(eps_step as f64 * 0.02).unwrap();
        let instances = build_instances(&[p, q]);
        let (p, q) = (&instances[0], &instances[1]);

        let forward = matcher.find_mapping(p, q);
        let backward = matcher.find_mapping(q, p);
        prop_assert_eq!(forward.is_some(), backward.is_some());
        if let Some(mapping) = forward {
            prop_assert!(matcher.validates(p, q, &mapping));
            prop_assert!(matcher.validates(q, p, &mapping.inverse()));
        }
    }

    #[test]
    fn prop_matches_survive_larger_epsilon(
        p in instance_strategy(),
        q in instance_strategy(),
        lower in 0u8..4,
        raise in 0u8..4,
    ) {
        let instances = build_instances(&[p, q]);
        let tight = InstanceMatcher::new(lower as f64 * 0.02).unwrap();
        let loose = InstanceMatcher::new((lower + raise) as f64 * 0.02).unwrap();
        if tight.matches(&instances[0], &instances[1]) {
            prop_assert!(loose.matches(&instances[0], &instances[1]));
        }
    }

    #[test]
    fn prop_support_is_monotone_in_min_freq(
        specs in prop::collection::vec(instance_strategy(), 1..30),
        min_freq in 1u32..6,
    ) {
        let matcher = InstanceMatcher::new(0.03).unwrap();
        let outcome = TreeGrouper::new(matcher).group(build_instances(&specs));
        let total = outcome.groups.len();

        let lower = FrequencyFilter::new(min_freq).apply(outcome.groups.clone());
        let higher = FrequencyFilter::new(min_freq + 1).apply(outcome.groups);
        for pattern in &higher {
            prop_assert!(lower.iter().any(|p| p.support_ids == pattern.support_ids));
        }
        prop_assert!(lower.len() <= total);
        prop_assert!(lower.iter().all(|p| p.support >= min_freq as usize));
        prop_assert!(lower.windows(2).all(|w| w[0].support >= w[1].support));
        prop_assert!(lower.iter().all(|p| p.support <= specs.len()));
    }
}

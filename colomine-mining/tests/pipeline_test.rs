//! End-to-end mining tests: catalog in, frequent patterns out.

use colomine_core::config::{
    ColomineConfig, GeneratorKind, GroupingStrategy, MiningConfig, SignatureAxis,
};
use colomine_core::types::{CountSemantics, Point, Sketch, SpatialCatalog};
use colomine_mining::MiningPipeline;

const A: u32 = 1;
const B: u32 = 2;
const PAD: u32 = 99;

fn ab_sketch() -> Sketch {
    Sketch::new(1.0, 1.0)
        .with_requirement(A, 1)
        .with_requirement(B, 1)
}

/// Two exact translates of an A/B pair.
fn scenario_a() -> SpatialCatalog {
    SpatialCatalog::new(vec![
        Point::new(1, 0.0, 0.0, A),
        Point::new(2, 0.05, 0.02, B),
        Point::new(3, 1.0, 1.0, A),
        Point::new(4, 1.05, 1.02, B),
    ])
}

/// Like `scenario_a`, but the second pair's B sits 0.05 further east, so
/// the pairs' offsets differ by 0.05 on x.
fn scenario_b() -> SpatialCatalog {
    SpatialCatalog::new(vec![
        Point::new(1, 0.0, 0.0, A),
        Point::new(2, 0.05, 0.02, B),
        Point::new(3, 1.0, 1.0, A),
        Point::new(4, 1.10, 1.02, B),
    ])
}

fn pipeline(epsilon: f64, min_freq: u32, grouping: GroupingStrategy) -> MiningPipeline {
    MiningPipeline::new(MiningConfig {
        epsilon: Some(epsilon),
        min_freq: Some(min_freq),
        grouping: Some(grouping),
        ..Default::default()
    })
    .unwrap()
}

const STRATEGIES: [GroupingStrategy; 3] = [
    GroupingStrategy::Naive,
    GroupingStrategy::Signature,
    GroupingStrategy::Tree,
];

#[test]
fn test_translated_pairs_form_one_pattern() {
    for strategy in STRATEGIES {
        let result = pipeline(0.1, 2, strategy)
            .run(&scenario_a(), &ab_sketch())
            .unwrap();
        assert_eq!(result.patterns.len(), 1, "strategy {strategy}");
        let pattern = &result.patterns[0];
        assert_eq!(pattern.support, 2);
        assert_eq!(pattern.keywords(), vec![A, B]);
        assert_eq!(pattern.support_ids[0].iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(pattern.support_ids[1].iter().copied().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(result.diagnostics.candidate_count, 3);
        assert_eq!(result.diagnostics.group_count, 2);
        assert_eq!(result.diagnostics.max_support, 2);
    }
}

#[test]
fn test_tight_epsilon_splits_perturbed_pairs() {
    for strategy in STRATEGIES {
        let loose = pipeline(0.1, 2, strategy)
            .run(&scenario_b(), &ab_sketch())
            .unwrap();
        assert_eq!(loose.patterns.len(), 1, "strategy {strategy}");
        assert_eq!(loose.patterns[0].support, 2);

        let tight = pipeline(0.01, 2, strategy)
            .run(&scenario_b(), &ab_sketch())
            .unwrap();
        assert!(tight.patterns.is_empty(), "strategy {strategy}");
        assert_eq!(tight.diagnostics.group_count, 3);
    }
}

#[test]
fn test_min_freq_one_reports_every_group() {
    let result = pipeline(0.01, 1, GroupingStrategy::Tree)
        .run(&scenario_b(), &ab_sketch())
        .unwrap();
    assert_eq!(result.patterns.len(), 3);
    assert!(result.patterns.iter().all(|p| p.support == 1));
}

#[test]
fn test_min_freq_above_catalog_size_is_empty() {
    let result = pipeline(0.1, 5, GroupingStrategy::Tree)
        .run(&scenario_a(), &ab_sketch())
        .unwrap();
    assert!(result.patterns.is_empty());
    assert_eq!(result.diagnostics.frequent_count, 0);
    assert_eq!(result.diagnostics.max_support, 0);
}

#[test]
fn test_missing_keyword_yields_nothing() {
    let sketch = ab_sketch().with_requirement(7, 1);
    let result = pipeline(0.1, 1, GroupingStrategy::Tree)
        .run(&scenario_a(), &sketch)
        .unwrap();
    assert_eq!(result.diagnostics.candidate_count, 0);
    assert!(result.patterns.is_empty());
}

#[test]
fn test_empty_catalog() {
    let result = pipeline(0.1, 1, GroupingStrategy::Tree)
        .run(&SpatialCatalog::default(), &ab_sketch())
        .unwrap();
    assert!(result.patterns.is_empty());
}

/// Three A/B pairs spread over a padded 13×13 extent, each well clear of
/// the others, plus a fourth pair whose B is displaced.
fn padded_catalog() -> SpatialCatalog {
    SpatialCatalog::new(vec![
        Point::new(100, 0.0, 0.0, PAD),
        Point::new(101, 13.0, 13.0, PAD),
        Point::new(1, 2.0, 2.0, A),
        Point::new(2, 2.2, 2.1, B),
        Point::new(3, 6.0, 3.0, A),
        Point::new(4, 6.2, 3.1, B),
        Point::new(5, 9.0, 9.0, A),
        Point::new(6, 9.2, 9.1, B),
        Point::new(7, 3.0, 10.0, A),
        Point::new(8, 3.6, 10.5, B),
    ])
}

#[test]
fn test_generators_agree_on_separated_clusters() {
    for semantics in [CountSemantics::AtLeast, CountSemantics::Exact] {
        let run = |generator| {
            MiningPipeline::new(MiningConfig {
                epsilon: Some(0.05),
                min_freq: Some(1),
                step: Some(0.25),
                count_semantics: Some(semantics),
                generator: Some(generator),
                ..Default::default()
            })
            .unwrap()
            .run(&padded_catalog(), &ab_sketch())
            .unwrap()
        };
        let sliding = run(GeneratorKind::SlidingWindow);
        let sweep = run(GeneratorKind::SweepLine);

        assert_eq!(sliding.diagnostics.candidate_count, 4);
        assert_eq!(sweep.diagnostics.candidate_count, 4);
        let supports = |r: &colomine_mining::MiningResult| {
            r.patterns.iter().map(|p| p.support).collect::<Vec<_>>()
        };
        assert_eq!(supports(&sliding), vec![3, 1]);
        assert_eq!(supports(&sweep), vec![3, 1]);
        assert_eq!(sliding.diagnostics.generator, "sliding_window");
    }
}

#[test]
fn test_exact_semantics_rejects_crowded_windows() {
    // A third point of keyword A sits next to every pair.
    let mut points = padded_catalog().points().to_vec();
    points.push(Point::new(20, 2.1, 2.05, A));
    let catalog = SpatialCatalog::new(points);

    let run = |semantics| {
        MiningPipeline::new(MiningConfig {
            min_freq: Some(1),
            count_semantics: Some(semantics),
            ..Default::default()
        })
        .unwrap()
        .run(&catalog, &ab_sketch())
        .unwrap()
    };
    let exact = run(CountSemantics::Exact);
    let at_least = run(CountSemantics::AtLeast);
    assert!(at_least.diagnostics.candidate_count > exact.diagnostics.candidate_count);
}

#[test]
fn test_signature_axis_does_not_change_result() {
    let run = |axis| {
        MiningPipeline::new(MiningConfig {
            epsilon: Some(0.1),
            min_freq: Some(1),
            grouping: Some(GroupingStrategy::Signature),
            signature_axis: Some(axis),
            ..Default::default()
        })
        .unwrap()
        .run(&padded_catalog(), &ab_sketch())
        .unwrap()
    };
    let x = run(SignatureAxis::X);
    let y = run(SignatureAxis::Y);
    assert_eq!(x.patterns, y.patterns);
}

#[test]
fn test_run_many_keeps_input_order() {
    let pipeline = pipeline(0.1, 1, GroupingStrategy::Tree);
    let sketches = vec![
        ab_sketch(),
        Sketch::new(1.0, 1.0).with_requirement(A, 1),
        Sketch::new(-1.0, 1.0).with_requirement(A, 1),
    ];
    let results = pipeline.run_many(&scenario_a(), &sketches);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().patterns.len(), 2);
    // Single-keyword sketch: every A point is its own instance, all alike.
    let single = results[1].as_ref().unwrap();
    assert_eq!(single.patterns.len(), 1);
    assert_eq!(single.patterns[0].support, 2);
    assert!(results[2].is_err());
}

#[test]
fn test_pipeline_from_toml_config() {
    let config = ColomineConfig::from_toml(
        r#"
[mining]
epsilon = 0.1
min_freq = 2
generator = "sweep_line"
grouping = "naive"
"#,
    )
    .unwrap();
    let result = MiningPipeline::new(config.mining)
        .unwrap()
        .run(&scenario_a(), &ab_sketch())
        .unwrap();
    assert_eq!(result.patterns.len(), 1);
    assert_eq!(result.diagnostics.grouping, "naive");
}

//! Deterministic synthetic catalogs: same seed, same catalog.
//!
//! Points come in two populations: planted co-location clusters that repeat
//! one keyword arrangement with small jitter, and uniform background noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use colomine_core::config::CatalogConfig;
use colomine_core::errors::CatalogError;
use colomine_core::types::{KeywordId, Point, PointId, Sketch, SpatialCatalog};
use colomine_mining::catalog::sample_random;

/// Catalog size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    /// ~200 points; fast enough for the sliding-window generator.
    Micro,
    /// ~2K points.
    Small,
    /// ~20K points.
    Medium,
}

impl FixtureSize {
    pub fn cluster_count(&self) -> usize {
        match self {
            Self::Micro => 20,
            Self::Small => 200,
            Self::Medium => 2_000,
        }
    }

    pub fn noise_count(&self) -> usize {
        self.cluster_count() * 6
    }

    /// Side of the square extent, chosen to keep density constant.
    pub fn extent(&self) -> f64 {
        (self.cluster_count() as f64).sqrt() * 10.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

/// Keywords of the planted arrangement.
pub const PLANTED: [KeywordId; 3] = [1, 1, 2];
/// Offsets of the planted arrangement from the cluster anchor.
const PLANTED_OFFSETS: [(f64, f64); 3] = [(0.1, 0.1), (0.4, 0.2), (0.25, 0.6)];
/// Background keywords are drawn from `0..NOISE_KEYWORDS`.
pub const NOISE_KEYWORDS: KeywordId = 8;

/// Sketch that finds the planted arrangement.
pub fn planted_sketch() -> Sketch {
    Sketch::new(1.0, 1.0)
        .with_requirement(1, 2)
        .with_requirement(2, 1)
}

/// Generate a catalog of the given size.
pub fn synthetic_catalog(size: FixtureSize, seed: u64, jitter: f64) -> SpatialCatalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let extent = size.extent();
    let mut points = Vec::with_capacity(size.cluster_count() * 3 + size.noise_count());
    let mut next_id: PointId = 0;

    for _ in 0..size.cluster_count() {
        let ax = rng.gen_range(0.0..extent - 1.0);
        let ay = rng.gen_range(0.0..extent - 1.0);
        for (&keyword, &(dx, dy)) in PLANTED.iter().zip(&PLANTED_OFFSETS) {
            let jx = rng.gen_range(-jitter..=jitter);
            let jy = rng.gen_range(-jitter..=jitter);
            points.push(Point::new(next_id, ax + dx + jx, ay + dy + jy, keyword));
            next_id += 1;
        }
    }

    for _ in 0..size.noise_count() {
        let x = rng.gen_range(0.0..extent);
        let y = rng.gen_range(0.0..extent);
        let keyword = rng.gen_range(0..NOISE_KEYWORDS);
        points.push(Point::new(next_id, x, y, keyword));
        next_id += 1;
    }

    SpatialCatalog::new(points)
}

/// Random subset of `catalog` for scalability runs, seeded from the
/// catalog config.
pub fn sampled_catalog(
    catalog: &SpatialCatalog,
    ratio: f64,
    config: &CatalogConfig,
) -> Result<SpatialCatalog, CatalogError> {
    sample_random(catalog, ratio, config.effective_sample_seed())
}

//! Catalog down-sampling for scalability runs.
//!
//! Both samplers keep at least one point, keep the parent's bounds, and
//! accept ratios in `(0, 1]`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use colomine_core::errors::CatalogError;
use colomine_core::types::{Point, SpatialCatalog};

/// Uniform sample of `max(1, floor(n * ratio))` points, reproducible for a
/// given seed.
pub fn sample_random(
    catalog: &SpatialCatalog,
    ratio: f64,
    seed: u64,
) -> Result<SpatialCatalog, CatalogError> {
    let size = sample_size(catalog.len(), ratio)?;
    let mut points = catalog.points().to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    points.shuffle(&mut rng);
    points.truncate(size);
    Ok(SpatialCatalog::with_bounds(points, catalog.bounds()))
}

/// The `max(1, floor(n * ratio))` points closest to the catalog centroid.
/// Ties on distance keep catalog order.
pub fn sample_dense(catalog: &SpatialCatalog, ratio: f64) -> Result<SpatialCatalog, CatalogError> {
    let size = sample_size(catalog.len(), ratio)?;
    if catalog.is_empty() {
        return Ok(catalog.clone());
    }
    let n = catalog.len() as f64;
    let cx = catalog.points().iter().map(|p| p.x).sum::<f64>() / n;
    let cy = catalog.points().iter().map(|p| p.y).sum::<f64>() / n;

    let mut ranked: Vec<(f64, Point)> = catalog
        .points()
        .iter()
        .map(|p| ((p.x - cx).powi(2) + (p.y - cy).powi(2), *p))
        .collect();
    ranked.sort_by(|(d1, _), (d2, _)| d1.total_cmp(d2));
    let points = ranked.into_iter().take(size).map(|(_, p)| p).collect();
    Ok(SpatialCatalog::with_bounds(points, catalog.bounds()))
}

fn sample_size(len: usize, ratio: f64) -> Result<usize, CatalogError> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(CatalogError::InvalidRatio { ratio });
    }
    if len == 0 {
        return Ok(0);
    }
    Ok(((len as f64 * ratio).floor() as usize).clamp(1, len))
}

//! Shared constants for the colomine miner.

/// Colomine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Mining defaults ---

/// Default positional tolerance for instance matching.
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Default minimum support for a pattern to be reported.
pub const DEFAULT_MIN_FREQ: u32 = 5;

/// Default grid step for the sliding-window generator.
pub const DEFAULT_STEP: f64 = 1.0;

// --- Catalog defaults ---

/// Whether delimited catalog files start with a header row.
pub const DEFAULT_HAS_HEADER: bool = true;

/// Whether raw latitude/longitude is projected to planar kilometres.
pub const DEFAULT_PROJECT: bool = true;

/// Default field delimiter for catalog files.
pub const DEFAULT_DELIMITER: char = ',';

/// Default seed for random catalog sampling.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

// --- Observability defaults ---

/// Default log filter when `COLOMINE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "colomine=info";

// --- Geometry ---

/// Two sketch dimensions closer than this are treated as equal.
pub const DIMENSION_TOLERANCE: f64 = 1e-9;

/// Slack added to the matching tolerance so offsets that agree up to float
/// rounding still match at `epsilon = 0`. Also widens the grouping
/// pre-filters by the same amount.
pub const ORDER_TOLERANCE: f64 = 1e-9;

/// Mean Earth radius in kilometres, used by the equirectangular projection.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

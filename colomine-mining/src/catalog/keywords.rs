//! Keyword frequency ranking, used to pick sketch keywords for experiments.

use colomine_core::types::{KeywordId, SpatialCatalog};

/// The `limit` most common keywords with their counts, most frequent first
/// and ties by ascending id.
pub fn frequent_keywords(catalog: &SpatialCatalog, limit: usize) -> Vec<(KeywordId, usize)> {
    let mut ranked: Vec<(KeywordId, usize)> = catalog.keyword_histogram().into_iter().collect();
    ranked.sort_by(|(k1, c1), (k2, c2)| c2.cmp(c1).then(k1.cmp(k2)));
    ranked.truncate(limit);
    ranked
}

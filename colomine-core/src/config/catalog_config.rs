//! Catalog ingestion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_HAS_HEADER, DEFAULT_PROJECT, DEFAULT_SAMPLE_SEED};

/// How delimited catalog files are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// First row is a header. Default: true.
    pub has_header: Option<bool>,
    /// Project latitude/longitude to planar kilometres. Default: true.
    pub project: Option<bool>,
    /// Field delimiter. Default: ','.
    pub delimiter: Option<char>,
    /// Seed for random sampling. Default: 42.
    pub sample_seed: Option<u64>,
}

impl CatalogConfig {
    pub fn effective_has_header(&self) -> bool {
        self.has_header.unwrap_or(DEFAULT_HAS_HEADER)
    }

    pub fn effective_project(&self) -> bool {
        self.project.unwrap_or(DEFAULT_PROJECT)
    }

    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(DEFAULT_DELIMITER)
    }

    pub fn effective_sample_seed(&self) -> u64 {
        self.sample_seed.unwrap_or(DEFAULT_SAMPLE_SEED)
    }
}

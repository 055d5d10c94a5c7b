//! Delimited-text catalog loader.
//!
//! Rows are `id,keyword,latitude,longitude` (extra trailing fields are
//! ignored). Malformed rows are skipped with a warning and counted; only an
//! unreadable source is an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use colomine_core::config::CatalogConfig;
use colomine_core::errors::CatalogError;
use colomine_core::types::{KeywordId, Point, PointId, SpatialCatalog};

use super::projection::{correct_longitude_scale, equirectangular};

/// A loaded catalog and what happened on the way.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub catalog: SpatialCatalog,
    /// Data rows seen (header and blank lines excluded).
    pub rows_read: usize,
    /// Rows dropped as malformed.
    pub skipped: usize,
    /// Factor applied to x by the latitude correction (1.0 if unprojected).
    pub x_scale: f64,
}

/// Load a catalog file.
pub fn load_catalog(path: &Path, config: &CatalogConfig) -> Result<LoadReport, CatalogError> {
    let file = File::open(path).map_err(|e| CatalogError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let report = read_rows(BufReader::new(file), config, &path.display().to_string())?;
    info!(
        path = %path.display(),
        points = report.catalog.len(),
        skipped = report.skipped,
        x_scale = report.x_scale,
        "catalog loaded"
    );
    Ok(report)
}

/// Parse a catalog from any buffered reader.
pub fn parse_catalog<R: BufRead>(
    reader: R,
    config: &CatalogConfig,
) -> Result<LoadReport, CatalogError> {
    read_rows(reader, config, "<reader>")
}

fn read_rows<R: BufRead>(
    reader: R,
    config: &CatalogConfig,
    source: &str,
) -> Result<LoadReport, CatalogError> {
    let delimiter = config.effective_delimiter();
    let project = config.effective_project();
    let mut lines = reader.lines().enumerate();

    if config.effective_has_header() {
        if let Some((_, line)) = lines.next() {
            line.map_err(|e| unreadable(source, &e))?;
        }
    }

    let mut points = Vec::new();
    let mut rows_read = 0;
    let mut skipped = 0;
    for (line_no, line) in lines {
        let line = line.map_err(|e| unreadable(source, &e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        rows_read += 1;
        match parse_row(trimmed, delimiter) {
            Ok((id, keyword, lat, lon)) => {
                let (x, y) = if project {
                    equirectangular(lat, lon)
                } else {
                    (lon, lat)
                };
                points.push(Point::new(id, x, y, keyword));
            }
            Err(reason) => {
                skipped += 1;
                warn!(line = line_no + 1, reason, "skipping malformed catalog row");
            }
        }
    }

    let x_scale = if project {
        correct_longitude_scale(&mut points)
    } else {
        1.0
    };

    Ok(LoadReport {
        catalog: SpatialCatalog::new(points),
        rows_read,
        skipped,
        x_scale,
    })
}

fn parse_row(line: &str, delimiter: char) -> Result<(PointId, KeywordId, f64, f64), &'static str> {
    let mut fields = line.split(delimiter).map(str::trim);
    let (Some(id), Some(keyword), Some(lat), Some(lon)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("fewer than four fields");
    };
    let id = id.parse::<PointId>().map_err(|_| "invalid id")?;
    let keyword = keyword.parse::<KeywordId>().map_err(|_| "invalid keyword")?;
    let lat = lat.parse::<f64>().map_err(|_| "invalid latitude")?;
    let lon = lon.parse::<f64>().map_err(|_| "invalid longitude")?;
    if !lat.is_finite() || !lon.is_finite() {
        return Err("non-finite coordinate");
    }
    Ok((id, keyword, lat, lon))
}

fn unreadable(source: &str, e: &std::io::Error) -> CatalogError {
    CatalogError::Unreadable {
        path: source.to_string(),
        message: e.to_string(),
    }
}

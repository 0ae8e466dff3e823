//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a sampled curve:
//! - run metadata (tool, timestamp, `R_V`)
//! - the sampled grid, with `null` where the law has no value
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, CurveGrid};
use crate::error::{AppError, EXIT_CONFIG};
use crate::law::R_V;

/// Wrap a sampled grid with run metadata.
pub fn curve_file(grid: CurveGrid) -> CurveFile {
    CurveFile {
        tool: "ccm".to_string(),
        generated: Utc::now(),
        r_v: R_V,
        grid,
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write curve JSON: {e}")))?;

    log::info!("wrote {} curve samples to {}", curve.grid.wavelength_um.len(), path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Invalid curve JSON: {e}")))?;

    if curve.grid.wavelength_um.len() != curve.grid.ratio.len() {
        return Err(AppError::new(
            EXIT_CONFIG,
            format!(
                "Invalid curve JSON: {} wavelengths but {} ratios.",
                curve.grid.wavelength_um.len(),
                curve.grid.ratio.len()
            ),
        ));
    }
    Ok(curve)
}

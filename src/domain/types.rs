//! Shared domain types.
//!
//! Output types are serializable so they can be:
//!
//! - printed as terminal tables
//! - exported to CSV/JSON
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::law::{Extinction, LawError, Regime, compute_ratio, compute_ratio_at_wavenumber};

/// One evaluated wavelength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub wavelength_um: f64,
    /// `1 / wavelength_um`, in µm⁻¹.
    pub wavenumber: f64,
    pub regime: Regime,
    /// `A_λ / A_V`; `None` when the wavelength is out of range.
    pub ratio: Option<f64>,
    /// `A_λ` in magnitudes for the table's `A_V`.
    pub a_lam_mag: Option<f64>,
}

impl TableRow {
    /// Evaluate the law at a wavelength in micrometers.
    pub fn from_wavelength(wavelength_um: f64, a_v: f64) -> Result<Self, LawError> {
        let extinction = compute_ratio(wavelength_um)?;
        Ok(Self::build(wavelength_um, 1.0 / wavelength_um, extinction, a_v))
    }

    /// Evaluate the law at a wavenumber in µm⁻¹.
    pub fn from_wavenumber(wavenumber: f64, a_v: f64) -> Result<Self, LawError> {
        let extinction = compute_ratio_at_wavenumber(wavenumber)?;
        Ok(Self::build(1.0 / wavenumber, wavenumber, extinction, a_v))
    }

    fn build(wavelength_um: f64, wavenumber: f64, extinction: Extinction, a_v: f64) -> Self {
        Self {
            wavelength_um,
            wavenumber,
            regime: Regime::classify(wavenumber),
            ratio: extinction.value(),
            a_lam_mag: extinction.scaled(a_v),
        }
    }
}

/// A full table of evaluated rows for one choice of `A_V`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtinctionTable {
    pub r_v: f64,
    pub a_v: f64,
    pub rows: Vec<TableRow>,
}

impl ExtinctionTable {
    /// Rows whose wavelength falls beyond the UV limit.
    pub fn out_of_range_count(&self) -> usize {
        self.rows.iter().filter(|r| r.ratio.is_none()).count()
    }
}

/// A sampled curve: parallel arrays of wavelength and ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub wavelength_um: Vec<f64>,
    pub ratio: Vec<Option<f64>>,
}

impl CurveGrid {
    /// `(wavenumber, ratio)` pairs for points inside the law's coverage.
    pub fn wavenumber_points(&self) -> Vec<(f64, f64)> {
        self.wavelength_um
            .iter()
            .zip(self.ratio.iter())
            .filter_map(|(&lam, r)| r.map(|v| (1.0 / lam, v)))
            .collect()
    }
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub r_v: f64,
    pub grid: CurveGrid,
}

/// Configuration for `ccm table`.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Visual extinction in magnitudes; display scaling only.
    pub a_v: f64,
    /// Wavenumbers (µm⁻¹) to tabulate in addition to CCM Table 3.
    pub extra_wavenumbers: Vec<f64>,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Configuration for `ccm eval`.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub a_v: f64,
    pub wavelengths: Vec<f64>,
    pub wavenumbers: Vec<f64>,
}

/// Configuration for `ccm curve`.
#[derive(Debug, Clone)]
pub struct CurveConfig {
    pub lam_min: f64,
    pub lam_max: f64,
    pub steps: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export_curve: Option<PathBuf>,
}

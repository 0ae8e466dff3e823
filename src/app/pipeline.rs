//! Shared run logic used by the CLI subcommands.
//!
//! Keeping this in one place keeps `app` focused on presentation
//! (printing and exports) while the evaluation steps stay testable.

use crate::curve::sample_curve;
use crate::domain::{CurveConfig, CurveFile, ExtinctionTable, TableConfig};
use crate::error::AppError;
use crate::io::curve_file;
use crate::report::{build_table, pick_wavenumbers};

/// Build the CCM table: Table 3 wavenumbers plus any extras, scaled by `A_V`.
pub fn run_table(config: &TableConfig) -> Result<ExtinctionTable, AppError> {
    let picks = pick_wavenumbers(&config.extra_wavenumbers)?;
    let table = build_table(&picks, config.a_v)?;
    log::debug!(
        "tabulated {} wavenumbers ({} out of range) for A_V={}",
        table.rows.len(),
        table.out_of_range_count(),
        table.a_v
    );
    Ok(table)
}

/// Sample the law over the configured wavelength range.
pub fn run_curve(config: &CurveConfig) -> Result<CurveFile, AppError> {
    let grid = sample_curve(config.lam_min, config.lam_max, config.steps)?;
    Ok(curve_file(grid))
}

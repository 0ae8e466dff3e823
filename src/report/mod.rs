//! Tabulation of the law: wavenumber selection, evaluation, and terminal output.

pub mod format;

pub use format::*;

use crate::domain::{EvalConfig, ExtinctionTable, TableRow};
use crate::error::{AppError, EXIT_CONFIG};
use crate::law::R_V;

/// Wavenumbers (µm⁻¹) of CCM (1989) Table 3.
pub const CCM_TABLE3_WAVENUMBERS: [f64; 9] = [2.78, 2.27, 1.82, 1.43, 1.11, 0.80, 0.63, 0.46, 0.29];

/// Combine extra wavenumbers with Table 3, sorted by decreasing wavenumber.
///
/// Duplicates are kept so every requested point shows up in the table.
pub fn pick_wavenumbers(extra: &[f64]) -> Result<Vec<f64>, AppError> {
    if let Some(bad) = extra.iter().find(|x| !(x.is_finite() && **x > 0.0)) {
        return Err(AppError::new(
            EXIT_CONFIG,
            format!("Invalid wavenumber {bad}: must be finite and > 0 (1/um)."),
        ));
    }

    let mut picks: Vec<f64> = extra.iter().copied().chain(CCM_TABLE3_WAVENUMBERS).collect();
    picks.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    Ok(picks)
}

/// Evaluate the law at each wavenumber and scale by `a_v`.
pub fn build_table(wavenumbers: &[f64], a_v: f64) -> Result<ExtinctionTable, AppError> {
    validate_a_v(a_v)?;

    let mut rows = Vec::with_capacity(wavenumbers.len());
    for &x in wavenumbers {
        let row = TableRow::from_wavenumber(x, a_v)?;
        if row.ratio.is_none() {
            log::warn!("x={x:.2} 1/um is shortward of the CCM coverage; ratio undefined");
        }
        rows.push(row);
    }

    Ok(ExtinctionTable { r_v: R_V, a_v, rows })
}

/// Evaluate explicitly requested wavelengths and wavenumbers, in input order.
pub fn evaluate_points(config: &EvalConfig) -> Result<ExtinctionTable, AppError> {
    validate_a_v(config.a_v)?;
    if config.wavelengths.is_empty() && config.wavenumbers.is_empty() {
        return Err(AppError::new(EXIT_CONFIG, "Nothing to evaluate: pass --lam and/or --x."));
    }

    let mut rows = Vec::with_capacity(config.wavelengths.len() + config.wavenumbers.len());
    for &lam in &config.wavelengths {
        rows.push(TableRow::from_wavelength(lam, config.a_v)?);
    }
    for &x in &config.wavenumbers {
        rows.push(TableRow::from_wavenumber(x, config.a_v)?);
    }

    Ok(ExtinctionTable { r_v: R_V, a_v: config.a_v, rows })
}

fn validate_a_v(a_v: f64) -> Result<(), AppError> {
    if !a_v.is_finite() {
        return Err(AppError::new(EXIT_CONFIG, format!("Invalid A_V {a_v}: must be finite.")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_EVAL;
    use crate::law::Regime;

    #[test]
    fn pick_wavenumbers_sorts_descending_with_extras() {
        let picks = pick_wavenumbers(&[3.0, 0.5, 2.78]).unwrap();
        assert_eq!(picks.len(), 12);
        assert_eq!(picks[0], 3.0);
        assert_eq!(picks[1], 2.78);
        assert_eq!(picks[2], 2.78);
        assert_eq!(picks[picks.len() - 1], 0.29);
        assert!(picks.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn pick_wavenumbers_defaults_to_table3() {
        let picks = pick_wavenumbers(&[]).unwrap();
        assert_eq!(picks, CCM_TABLE3_WAVENUMBERS.to_vec());
    }

    #[test]
    fn pick_wavenumbers_rejects_non_positive() {
        let err = pick_wavenumbers(&[1.0, 0.0]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert!(pick_wavenumbers(&[f64::NAN]).is_err());
    }

    #[test]
    fn build_table_scales_by_a_v() {
        let one = build_table(&CCM_TABLE3_WAVENUMBERS, 1.0).unwrap();
        let two = build_table(&CCM_TABLE3_WAVENUMBERS, 2.0).unwrap();
        for (a, b) in one.rows.iter().zip(two.rows.iter()) {
            assert_eq!(a.ratio, b.ratio);
            let (ma, mb) = (a.a_lam_mag.unwrap(), b.a_lam_mag.unwrap());
            assert!((mb - 2.0 * ma).abs() < 1e-12);
        }
        assert_eq!(one.r_v, 3.1);
        assert_eq!(one.out_of_range_count(), 0);
    }

    #[test]
    fn build_table_keeps_out_of_range_rows() {
        let table = build_table(&[4.0, 1.82], 5.0).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].regime, Regime::Ultraviolet);
        assert_eq!(table.rows[0].ratio, None);
        assert_eq!(table.rows[0].a_lam_mag, None);
        assert_eq!(table.rows[1].ratio, Some(1.0));
        assert_eq!(table.rows[1].a_lam_mag, Some(5.0));
        assert_eq!(table.out_of_range_count(), 1);
    }

    #[test]
    fn build_table_rejects_non_finite_a_v() {
        assert!(build_table(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn evaluate_points_mixes_wavelengths_and_wavenumbers() {
        let config = EvalConfig {
            a_v: 1.0,
            wavelengths: vec![5.0, 0.25],
            wavenumbers: vec![0.29],
        };
        let table = evaluate_points(&config).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].ratio, Some(0.0));
        assert_eq!(table.rows[0].regime, Regime::FarInfrared);
        assert_eq!(table.rows[1].ratio, None);
        assert_eq!(table.rows[2].regime, Regime::NearInfrared);
    }

    #[test]
    fn evaluate_points_reports_invalid_wavelength() {
        let config = EvalConfig {
            a_v: 1.0,
            wavelengths: vec![-0.5],
            wavenumbers: vec![],
        };
        let err = evaluate_points(&config).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_EVAL);
        assert!(err.message().contains("wavelength"));
    }

    #[test]
    fn evaluate_points_requires_input() {
        let config = EvalConfig {
            a_v: 1.0,
            wavelengths: vec![],
            wavenumbers: vec![],
        };
        assert_eq!(evaluate_points(&config).unwrap_err().exit_code(), EXIT_CONFIG);
    }
}

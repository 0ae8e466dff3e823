//! Parallel evaluation of the law over a wavelength grid.

use rayon::prelude::*;

use crate::curve::log_space;
use crate::domain::CurveGrid;
use crate::error::AppError;
use crate::law::{Extinction, LawError, compute_ratio};

/// Sample `A_λ/A_V` on `steps` log-spaced wavelengths in `[lam_min, lam_max]` µm.
///
/// Points shortward of the law's coverage are kept as `None` so the grid stays
/// aligned with the requested wavelengths.
pub fn sample_curve(lam_min: f64, lam_max: f64, steps: usize) -> Result<CurveGrid, AppError> {
    let wavelengths = log_space(lam_min, lam_max, steps)?;

    // Each point is independent; `collect` preserves grid order.
    let ratio = wavelengths
        .par_iter()
        .map(|&lam| compute_ratio(lam).map(Extinction::value))
        .collect::<Result<Vec<_>, LawError>>()?;

    let skipped = ratio.iter().filter(|r| r.is_none()).count();
    if skipped > 0 {
        log::debug!("{skipped} of {steps} curve samples are shortward of the UV limit");
    }

    Ok(CurveGrid {
        wavelength_um: wavelengths,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_curve_matches_pointwise_evaluation() {
        let grid = sample_curve(0.2, 5.0, 64).unwrap();
        assert_eq!(grid.wavelength_um.len(), 64);
        assert_eq!(grid.ratio.len(), 64);
        for (lam, r) in grid.wavelength_um.iter().zip(grid.ratio.iter()) {
            assert_eq!(*r, compute_ratio(*lam).unwrap().value());
        }
        // 0.2 um is in the UV, 5 um is past the IR floor.
        assert_eq!(grid.ratio[0], None);
        assert_eq!(grid.ratio[63], Some(0.0));
    }

    #[test]
    fn wavenumber_points_skip_out_of_range() {
        let grid = sample_curve(0.2, 1.0, 10).unwrap();
        let points = grid.wavenumber_points();
        let in_range = grid.ratio.iter().filter(|r| r.is_some()).count();
        assert_eq!(points.len(), in_range);
        assert!(points.iter().all(|&(x, _)| x <= 3.3));
    }
}

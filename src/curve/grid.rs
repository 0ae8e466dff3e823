//! Wavelength grid generation.
//!
//! Curves are sampled on a log-spaced grid: the law's regimes are defined in
//! wavenumber, so log spacing gives comparable resolution across the optical
//! and infrared segments.

use crate::error::{AppError, EXIT_CONFIG};

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0 && max > min) {
        return Err(AppError::new(
            EXIT_CONFIG,
            format!("Invalid wavelength range: min={min}, max={max} (must be finite, >0, and max>min)."),
        ));
    }
    if steps < 2 {
        return Err(AppError::new(EXIT_CONFIG, "Grid steps must be >= 2."));
    }

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push((ln_min + step * i as f64).exp());
    }
    // Pin the endpoints so boundary wavelengths are hit exactly.
    out[0] = min;
    out[steps - 1] = max;
    Ok(out)
}

//! CCM (1989) evaluation for a fixed `R_V = 3.1`.
//!
//! The law is piecewise in wavenumber `x = 1/λ` (µm⁻¹):
//!
//! | regime        | range             | form                                  |
//! |---------------|-------------------|---------------------------------------|
//! | ultraviolet   | `x > 3.3`         | not covered (out of range)            |
//! | optical/NUV   | `1.1 ≤ x ≤ 3.3`   | 7th-order power sums in `y = x - 1.82` |
//! | near-infrared | `0.29 ≤ x < 1.1`  | `a = 0.574·x^1.61`, `b = -0.527·x^1.61` |
//! | far-infrared  | `x < 0.29`        | exactly `0.0`                         |
//!
//! In every covered regime `A_λ/A_V = a(x) + b(x)/R_V` (CCM 1989, Eq. 1).
//!
//! Boundary wavenumbers are routed exactly as published: `3.3` and `1.1` are
//! optical, `0.29` is near-infrared.

use serde::{Deserialize, Serialize};

use crate::math::power_sum;

/// Ratio of total to selective extinction, `A_V / E(B-V)`.
pub const R_V: f64 = 3.1;

/// Largest wavenumber (µm⁻¹) covered by the law (λ ≈ 0.303 µm).
pub const X_UV_LIMIT: f64 = 3.3;

/// Lower edge of the optical/near-UV regime (λ ≈ 0.909 µm).
pub const X_OPTICAL_MIN: f64 = 1.1;

/// Lower edge of the near-infrared regime (λ ≈ 3.45 µm).
pub const X_IR_MIN: f64 = 0.29;

/// Pivot of the optical power sums: `y = x - Y_PIVOT`.
pub const Y_PIVOT: f64 = 1.82;

/// Near-infrared power-law exponent.
const IR_EXPONENT: f64 = 1.61;
const IR_A_SCALE: f64 = 0.574;
const IR_B_SCALE: f64 = -0.527;

/// `a(y)` coefficients, constant term first.
const OPTICAL_A: [f64; 8] = [
    1.0, 0.17699, -0.50447, -0.02427, 0.72085, 0.01979, -0.77530, 0.32999,
];

/// `b(y)` coefficients, constant term first.
const OPTICAL_B: [f64; 8] = [
    0.0, 1.41338, 2.28305, 1.07233, -5.38434, -0.62251, 5.30260, -2.09002,
];

/// Errors raised for inputs outside the law's precondition.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LawError {
    #[error("wavelength must be finite and positive, got {value} um")]
    InvalidWavelength { value: f64 },
    #[error("wavenumber must be finite and positive, got {value} 1/um")]
    InvalidWavenumber { value: f64 },
}

/// Wavenumber regime of the law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Regime {
    /// `x > 3.3`: shortward of the law's coverage.
    Ultraviolet,
    /// `1.1 ≤ x ≤ 3.3`.
    Optical,
    /// `0.29 ≤ x < 1.1`.
    NearInfrared,
    /// `x < 0.29`: the law contributes no extinction.
    FarInfrared,
}

impl Regime {
    /// Select the regime for a wavenumber in µm⁻¹.
    ///
    /// `x` is expected to be finite and positive; callers validate first.
    pub fn classify(x: f64) -> Self {
        match x {
            x if x > X_UV_LIMIT => Regime::Ultraviolet,
            x if x >= X_OPTICAL_MIN => Regime::Optical,
            x if x >= X_IR_MIN => Regime::NearInfrared,
            _ => Regime::FarInfrared,
        }
    }

    /// Short label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Regime::Ultraviolet => "UV",
            Regime::Optical => "optical",
            Regime::NearInfrared => "near-IR",
            Regime::FarInfrared => "far-IR",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The `a(x)`, `b(x)` pair of CCM Eq. 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
}

impl Coefficients {
    /// `a + b / R_V`.
    pub fn ratio(self) -> f64 {
        self.a + self.b / R_V
    }
}

/// Result of evaluating the law at one wavelength.
///
/// The law has no value shortward of `x = 3.3`; that case is carried as
/// `OutOfRange` instead of a NaN so it cannot leak into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extinction {
    /// `A_λ / A_V`, dimensionless. Not bounded to `[0, 1]`.
    Ratio(f64),
    /// Wavelength is in the ultraviolet, beyond the law's coverage.
    OutOfRange,
}

impl Extinction {
    pub fn value(self) -> Option<f64> {
        match self {
            Extinction::Ratio(v) => Some(v),
            Extinction::OutOfRange => None,
        }
    }

    /// `A_λ` in magnitudes for a given visual extinction `A_V`.
    pub fn scaled(self, a_v: f64) -> Option<f64> {
        self.value().map(|v| v * a_v)
    }

    pub fn is_out_of_range(self) -> bool {
        matches!(self, Extinction::OutOfRange)
    }
}

/// Compute `a(x)` and `b(x)` for a wavenumber, or `None` in the ultraviolet.
pub fn coefficients(x: f64) -> Option<Coefficients> {
    match Regime::classify(x) {
        Regime::Ultraviolet => None,
        Regime::Optical => {
            let y = x - Y_PIVOT;
            Some(Coefficients {
                a: power_sum(&OPTICAL_A, y),
                b: power_sum(&OPTICAL_B, y),
            })
        }
        Regime::NearInfrared => {
            let xp = x.powf(IR_EXPONENT);
            Some(Coefficients {
                a: IR_A_SCALE * xp,
                b: IR_B_SCALE * xp,
            })
        }
        Regime::FarInfrared => Some(Coefficients { a: 0.0, b: 0.0 }),
    }
}

/// Compute `A_λ / A_V` for a wavelength `lam` in micrometers.
///
/// # Errors
/// Returns [`LawError::InvalidWavelength`] if `lam` is zero, negative, or not finite.
pub fn compute_ratio(lam: f64) -> Result<Extinction, LawError> {
    if !(lam.is_finite() && lam > 0.0) {
        return Err(LawError::InvalidWavelength { value: lam });
    }
    Ok(evaluate(1.0 / lam))
}

/// Compute `A_λ / A_V` directly from a wavenumber `x` in µm⁻¹.
///
/// # Errors
/// Returns [`LawError::InvalidWavenumber`] if `x` is zero, negative, or not finite.
pub fn compute_ratio_at_wavenumber(x: f64) -> Result<Extinction, LawError> {
    if !(x.is_finite() && x > 0.0) {
        return Err(LawError::InvalidWavenumber { value: x });
    }
    Ok(evaluate(x))
}

fn evaluate(x: f64) -> Extinction {
    match coefficients(x) {
        Some(c) => Extinction::Ratio(c.ratio()),
        None => {
            log::trace!("x={x} is beyond the UV limit {X_UV_LIMIT}");
            Extinction::OutOfRange
        }
    }
}

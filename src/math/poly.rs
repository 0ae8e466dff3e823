//! Power-series evaluation for the CCM optical coefficients.
//!
//! The published fits are given as plain power sums in `y = x - 1.82`:
//!
//! `p(y) = c0 + c1·y + c2·y² + … + c7·y⁷`
//!
//! Terms are evaluated one by one with `powf`, not with Horner's scheme, so
//! results match reference tables computed from the published form.

/// Evaluate `Σ coeffs[k] · y^k`.
///
/// `coeffs[0]` is the constant term. An empty slice evaluates to `0.0`.
pub fn power_sum(coeffs: &[f64], y: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, c)| c * y.powf(k as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_sum_at_zero_is_constant_term() {
        assert_eq!(power_sum(&[1.0, 0.5, -2.0], 0.0), 1.0);
        assert_eq!(power_sum(&[0.0, 1.41338, 2.28305], 0.0), 0.0);
    }

    #[test]
    fn power_sum_matches_hand_expansion() {
        // 2 - 3y + y^3 at y = 2 -> 2 - 6 + 8 = 4
        let v = power_sum(&[2.0, -3.0, 0.0, 1.0], 2.0);
        assert!((v - 4.0).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn power_sum_empty_is_zero() {
        assert_eq!(power_sum(&[], 3.0), 0.0);
    }
}

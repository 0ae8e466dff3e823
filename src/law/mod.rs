//! The Cardelli, Clayton & Mathis (1989) interstellar extinction law.
//!
//! The law is a set of pure, closed-form functions of wavenumber `x = 1/λ`
//! (λ in micrometers). Evaluation has no state and is safe to call from any
//! number of threads at once.

pub mod ccm;

pub use ccm::*;

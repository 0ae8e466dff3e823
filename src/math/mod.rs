//! Mathematical utilities for the polynomial fits of the extinction law.

pub mod poly;

pub use poly::*;

//! Domain types used throughout the driver.
//!
//! This module defines:
//!
//! - tabulated law output (`TableRow`, `ExtinctionTable`)
//! - sampled curves and their portable JSON form (`CurveGrid`, `CurveFile`)
//! - run configuration derived from CLI flags (`TableConfig`, `EvalConfig`, `CurveConfig`)

pub mod types;

pub use types::*;

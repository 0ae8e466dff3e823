//! `ccm-extinction` library crate.
//!
//! Interstellar extinction `A_λ/A_V` per Cardelli, Clayton & Mathis (1989)
//! with `R_V = 3.1`. The core is [`law::compute_ratio`]; everything else is
//! the `ccm` driver around it.
//!
//! The binary (`ccm`) is a thin wrapper around this library so that:
//!
//! - the law is testable without spawning processes
//! - other tools can call the law directly

pub mod app;
pub mod cli;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod law;
pub mod math;
pub mod plot;
pub mod report;

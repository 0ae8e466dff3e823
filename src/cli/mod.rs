//! Command-line parsing for the CCM (1989) extinction tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the law itself.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ccm",
    version,
    about = "Interstellar extinction A_lam/A_V per Cardelli, Clayton & Mathis (1989), R_V = 3.1"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reproduce the CCM Table 3 column a(x) + b(x)/R_V and A_lam for an assumed A_V.
    Table(TableArgs),
    /// Evaluate the law at specific wavelengths and/or wavenumbers.
    Eval(EvalArgs),
    /// Sample the law over a wavelength range, plot it, and optionally export it.
    Curve(CurveArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    /// Magnitudes of visual extinction to assume. Only scales the A_lam column.
    #[arg(value_name = "A_V", env = "CCM_A_V", allow_negative_numbers = true)]
    pub a_v: f64,

    /// Extra wavenumbers (1/um) to tabulate alongside Table 3 (repeatable or comma-separated).
    #[arg(long = "x", value_name = "X", value_delimiter = ',')]
    pub extra: Vec<f64>,

    /// Export the table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the table to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// Wavelengths in micrometers (repeatable or comma-separated).
    #[arg(long, value_name = "UM", value_delimiter = ',')]
    pub lam: Vec<f64>,

    /// Wavenumbers in 1/um (repeatable or comma-separated).
    #[arg(long = "x", value_name = "X", value_delimiter = ',')]
    pub x: Vec<f64>,

    /// Magnitudes of visual extinction used for the A_lam column.
    #[arg(long = "a-v", env = "CCM_A_V", default_value_t = 1.0, allow_negative_numbers = true)]
    pub a_v: f64,
}

#[derive(Debug, Parser, Clone)]
pub struct CurveArgs {
    /// Shortest wavelength (um) to sample.
    #[arg(long = "lam-min", default_value_t = 0.25)]
    pub lam_min: f64,

    /// Longest wavelength (um) to sample.
    #[arg(long = "lam-max", default_value_t = 4.0)]
    pub lam_max: f64,

    /// Number of log-spaced samples.
    #[arg(long, default_value_t = 400)]
    pub steps: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sampled curve to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `ccm curve --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

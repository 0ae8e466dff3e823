//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments
//! - evaluates the law (table, points, or sampled curve)
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CurveArgs, EvalArgs, PlotArgs, TableArgs};
use crate::domain::{CurveConfig, EvalConfig, TableConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ccm` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init();

    // `ccm 5.0` behaves like `ccm table 5.0`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Eval(args) => handle_eval(args),
        Command::Curve(args) => handle_curve(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args);
    let table = pipeline::run_table(&config)?;

    println!("{}", crate::report::format_table(&table));

    if let Some(path) = &config.export_csv {
        crate::io::write_table_csv(path, &table)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::write_table_json(path, &table)?;
    }

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args);
    let table = crate::report::evaluate_points(&config)?;
    print!("{}", crate::report::format_points(&table));
    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    let config = curve_config_from_args(&args);
    let curve = pipeline::run_curve(&config)?;

    if config.plot {
        let plot = crate::plot::render_curve_file_plot(&curve, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export_curve {
        crate::io::write_curve_json(path, &curve)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_curve_file_plot(&curve, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn table_config_from_args(args: &TableArgs) -> TableConfig {
    TableConfig {
        a_v: args.a_v,
        extra_wavenumbers: args.extra.clone(),
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn eval_config_from_args(args: &EvalArgs) -> EvalConfig {
    EvalConfig {
        a_v: args.a_v,
        wavelengths: args.lam.clone(),
        wavenumbers: args.x.clone(),
    }
}

pub fn curve_config_from_args(args: &CurveArgs) -> CurveConfig {
    CurveConfig {
        lam_min: args.lam_min,
        lam_max: args.lam_max,
        steps: args.steps,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_curve: args.export_curve.clone(),
    }
}

/// Rewrite argv so a bare `A_V` selects the `table` subcommand.
///
/// Rules:
/// - `ccm 5.0 ...`             -> `ccm table 5.0 ...`
/// - `ccm --x 3.0 5.0`         -> `ccm table --x 3.0 5.0`
/// - `ccm --help/--version/-h` -> unchanged (show top-level help/version)
/// - `ccm` or `ccm <subcommand>` -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "table" | "eval" | "curve" | "plot");
    if is_subcommand {
        return argv;
    }

    if arg1.parse::<f64>().is_ok() || arg1.starts_with('-') {
        argv.insert(1, "table".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_a_v_runs_table() {
        assert_eq!(rewrite_args(argv(&["ccm", "5.0"])), argv(&["ccm", "table", "5.0"]));
        assert_eq!(rewrite_args(argv(&["ccm", "-1"])), argv(&["ccm", "table", "-1"]));
        assert_eq!(
            rewrite_args(argv(&["ccm", "--x", "3.0", "2"])),
            argv(&["ccm", "table", "--x", "3.0", "2"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for args in [
            vec!["ccm"],
            vec!["ccm", "--help"],
            vec!["ccm", "-V"],
            vec!["ccm", "curve", "--steps", "10"],
            vec!["ccm", "eval", "--lam", "0.5"],
        ] {
            assert_eq!(rewrite_args(argv(&args)), argv(&args));
        }
    }

    #[test]
    fn rewritten_args_parse_as_table() {
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&["ccm", "2.5"]))).unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table command");
        };
        let config = table_config_from_args(&args);
        assert_eq!(config.a_v, 2.5);
        assert!(config.extra_wavenumbers.is_empty());
    }

    #[test]
    fn curve_args_map_to_config() {
        let cli = crate::cli::Cli::try_parse_from(["ccm", "curve", "--no-plot", "--steps", "12"]).unwrap();
        let Command::Curve(args) = cli.command else {
            panic!("expected curve command");
        };
        let config = curve_config_from_args(&args);
        assert!(!config.plot);
        assert_eq!(config.steps, 12);
    }
}

//! Formatted terminal output for extinction tables.
//!
//! Formatting lives here so the law and tabulation code stay free of
//! presentation details, and output changes stay localized (golden tests).

use crate::domain::{ExtinctionTable, TableRow};

/// Placeholder printed where the law has no value.
const OUT_OF_RANGE: &str = "nan";

/// Format the classic CCM table: wavelength, wavenumber, `A_λ/A_V`, and `A_λ`.
pub fn format_table(table: &ExtinctionTable) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nR_V = {} is fixed.\n", table.r_v));
    out.push_str(&format!("For your choice of A_V =  {:?} :\n\n", table.a_v));
    out.push_str("lam       x      A_lam/A_V       A_lam\n");
    out.push_str("(um)    (1/um)                   (mags)\n");
    out.push_str("----    ------   ---------       ------\n");

    for row in &table.rows {
        out.push_str(&format!(
            "{:.2} \t {:.2} \t {:>7} \t {}\n",
            row.wavelength_um,
            row.wavenumber,
            fmt_opt(row.ratio, 3),
            fmt_opt(row.a_lam_mag, 3),
        ));
    }

    out
}

/// Format evaluated points with their regime (used by `ccm eval`).
pub fn format_points(table: &ExtinctionTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("R_V = {} | A_V = {} mag\n", table.r_v, table.a_v));

    out.push_str(
        format!(
            "{:>12} {:>10} {:<8} {:>12} {:>12}\n",
            "lam (um)", "x (1/um)", "regime", "A_lam/A_V", "A_lam (mag)"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:->12} {:->10} {:-<8} {:->12} {:->12}\n", "", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for row in &table.rows {
        out.push_str(format_point_row(row).trim_end());
        out.push('\n');
    }

    out
}

fn format_point_row(row: &TableRow) -> String {
    format!(
        "{:>12.4} {:>10.4} {:<8} {:>12} {:>12}",
        row.wavelength_um,
        row.wavenumber,
        row.regime.display_name(),
        fmt_opt(row.ratio, 5),
        fmt_opt(row.a_lam_mag, 5),
    )
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) => format!("{v:.decimals$}"),
        None => OUT_OF_RANGE.to_string(),
    }
}

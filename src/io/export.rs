//! Export extinction tables to CSV or JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream scripts.
//! Out-of-range values are written as empty CSV fields and JSON `null`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ExtinctionTable;
use crate::error::{AppError, EXIT_CONFIG};

/// Write a table to a CSV file.
pub fn write_table_csv(path: &Path, table: &ExtinctionTable) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_table_csv_to(&mut file, table)?;
    log::info!("wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

/// Write a table as CSV to any writer.
pub fn write_table_csv_to<W: Write>(out: &mut W, table: &ExtinctionTable) -> Result<(), AppError> {
    writeln!(out, "wavelength_um,wavenumber,regime,ratio,a_lam_mag")
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write export CSV header: {e}")))?;

    for r in &table.rows {
        writeln!(
            out,
            "{:.6},{:.6},{},{},{}",
            r.wavelength_um,
            r.wavenumber,
            r.regime.display_name(),
            r.ratio.map(|v| format!("{v:.10}")).unwrap_or_default(),
            r.a_lam_mag.map(|v| format!("{v:.10}")).unwrap_or_default(),
        )
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a table to a pretty-printed JSON file.
pub fn write_table_json(path: &Path, table: &ExtinctionTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write export JSON: {e}")))?;
    log::info!("wrote table JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_table;

    #[test]
    fn csv_leaves_out_of_range_fields_empty() {
        let table = build_table(&[4.0, 1.82, 0.1], 2.0).unwrap();
        let mut buf = Vec::new();
        write_table_csv_to(&mut buf, &table).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let expected = concat!(
            "wavelength_um,wavenumber,regime,ratio,a_lam_mag\n",
            "0.250000,4.000000,UV,,\n",
            "0.549451,1.820000,optical,1.0000000000,2.0000000000\n",
            "10.000000,0.100000,far-IR,0.0000000000,0.0000000000\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn json_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        let table = build_table(&[4.0, 0.8], 1.0).unwrap();
        write_table_json(&path, &table).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"regime\": \"ultraviolet\""));
        assert!(text.contains("\"ratio\": null"));
        let back: ExtinctionTable = serde_json::from_str(&text).unwrap();
        assert_eq!(back, table);
    }
}

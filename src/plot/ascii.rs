//! ASCII plotting of `A_λ/A_V` against wavenumber.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Wavenumber increases to the right, so the ultraviolet end is on the right.

use crate::domain::{CurveFile, CurveGrid};

/// Render a sampled curve. Out-of-range samples are not drawn.
pub fn render_curve_plot(grid: &CurveGrid, width: usize, height: usize) -> String {
    render_ascii_plot(&grid.wavenumber_points(), width, height)
}

/// Render a curve read back from a saved JSON file.
pub fn render_curve_file_plot(curve: &CurveFile, width: usize, height: usize) -> String {
    render_curve_plot(&curve.grid, width, height)
}

/// Render `(wavenumber, ratio)` points as a connected line.
pub fn render_ascii_plot(points: &[(f64, f64)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut points = points.to_vec();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let (x_min, x_max) = range(points.iter().map(|p| p.0)).unwrap_or((0.29, 3.3));
    let (y_min, y_max) = range(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, &points, x_min, x_max, y_min, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] 1/um | A_lam/A_V=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v.is_finite() && max_v.is_finite() && max_v > min_v {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::sample_curve;

    #[test]
    fn plot_golden_snapshot_small() {
        let points = [(2.0, 1.0), (1.0, 0.0), (3.0, 1.0)];
        let txt = render_ascii_plot(&points, 10, 5);
        let expected = concat!(
            "Plot: x=[1.000, 3.000] 1/um | A_lam/A_V=[-0.050, 1.050]\n",
            "     -----\n",
            "    -     \n",
            "  --      \n",
            " -        \n",
            "-         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn plot_has_requested_shape() {
        let grid = sample_curve(0.25, 4.0, 200).unwrap();
        let txt = render_curve_plot(&grid, 60, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 60));
        assert!(txt.contains('-'));
    }

    #[test]
    fn plot_without_points_is_blank() {
        let txt = render_ascii_plot(&[], 10, 5);
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.lines().skip(1).all(|l| l.trim().is_empty()));
    }
}

//! CSV rendering of generated values.

use crate::render_scalar;
use testgen_core::GeneratedValue;

/// Render as CSV.
///
/// Sequences are comma-joined scalar renderings; grids emit one
/// comma-joined row per line; raw strings pass through unquoted.
pub fn format(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Sequence(elements) => elements
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(","),
        GeneratedValue::Grid(grid) => grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        GeneratedValue::Text(s) => s.clone(),
    }
}

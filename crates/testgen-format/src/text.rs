//! Plain-text rendering of generated values.

use crate::render_scalar;
use testgen_core::GeneratedValue;

/// Render as plain text.
///
/// Same per-element rendering as CSV, but sequences and grid cells are
/// space-joined; grid rows still get one line each.
pub fn format(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Sequence(elements) => elements
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(" "),
        GeneratedValue::Grid(grid) => grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        GeneratedValue::Text(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::ElementValue;

    #[test]
    fn test_character_sequence() {
        let value = GeneratedValue::Sequence(vec![
            ElementValue::Char('a'),
            ElementValue::Char('b'),
        ]);
        assert_eq!(format(&value), "'a' 'b'");
    }

    #[test]
    fn test_number_sequence() {
        let value = GeneratedValue::Sequence(vec![
            ElementValue::Int(1),
            ElementValue::Int(2),
            ElementValue::Int(3),
        ]);
        assert_eq!(format(&value), "1 2 3");
    }

    #[test]
    fn test_grid_rows_per_line() {
        let value = GeneratedValue::Grid(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(format(&value), "1 2 3\n4 5 6");
    }

    #[test]
    fn test_text_passes_through() {
        let value = GeneratedValue::Text("hello world".to_string());
        assert_eq!(format(&value), "hello world");
    }
}

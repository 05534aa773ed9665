//! JSON rendering of generated values.

use crate::render_scalar;
use testgen_core::GeneratedValue;

/// Render as JSON.
///
/// Sequences keep per-kind scalar quoting (characters come out
/// single-quoted), grids use the standard two-dimensional array encoding,
/// and raw strings are double-quoted.
pub fn format(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Sequence(elements) => {
            let rendered: Vec<String> = elements.iter().map(render_scalar).collect();
            format!("[{}]", rendered.join(", "))
        }
        GeneratedValue::Grid(grid) => {
            // A grid of plain integers cannot fail to serialize.
            serde_json::to_string(grid).expect("integer grid always serializes")
        }
        GeneratedValue::Text(s) => format!("\"{s}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::ElementValue;

    #[test]
    fn test_empty_sequence() {
        assert_eq!(format(&GeneratedValue::Sequence(vec![])), "[]");
    }

    #[test]
    fn test_number_sequence() {
        let value = GeneratedValue::Sequence(vec![
            ElementValue::Int(1),
            ElementValue::Int(-2),
            ElementValue::Int(3),
        ]);
        assert_eq!(format(&value), "[1, -2, 3]");
    }

    #[test]
    fn test_string_sequence_double_quotes_elements() {
        let value = GeneratedValue::Sequence(vec![
            ElementValue::Str("ab".to_string()),
            ElementValue::Str("cd".to_string()),
        ]);
        assert_eq!(format(&value), "[\"ab\", \"cd\"]");
    }

    #[test]
    fn test_character_sequence_single_quotes_elements() {
        let value = GeneratedValue::Sequence(vec![
            ElementValue::Char('a'),
            ElementValue::Char('b'),
        ]);
        assert_eq!(format(&value), "['a', 'b']");
    }

    #[test]
    fn test_grid_standard_encoding() {
        let value = GeneratedValue::Grid(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(format(&value), "[[1,2],[3,4]]");
    }

    #[test]
    fn test_text_is_double_quoted() {
        let value = GeneratedValue::Text("xyz".to_string());
        assert_eq!(format(&value), "\"xyz\"");
    }
}

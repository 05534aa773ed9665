//! Output rendering for generated test-case values.
//!
//! Renders a [`GeneratedValue`] as JSON, CSV, or plain text. Scalar
//! rendering is shared across formats (strings double-quoted, characters
//! single-quoted, numbers bare); the formats differ in how elements are
//! joined and how grids and raw strings are encoded.
//!
//! [`GeneratedValue`]: testgen_core::GeneratedValue

pub mod csv;
pub mod json;
pub mod text;

use testgen_core::{ElementValue, GeneratedValue, OutputFormat};

/// Render a generated value in the requested output format.
pub fn format_value(value: &GeneratedValue, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format(value),
        OutputFormat::Csv => csv::format(value),
        OutputFormat::PlainText => text::format(value),
    }
}

/// Render one scalar element: strings double-quoted, characters
/// single-quoted, numbers bare.
pub(crate) fn render_scalar(element: &ElementValue) -> String {
    match element {
        ElementValue::Int(v) => v.to_string(),
        ElementValue::Char(c) => format!("'{c}'"),
        ElementValue::Str(s) => format!("\"{s}\""),
    }
}

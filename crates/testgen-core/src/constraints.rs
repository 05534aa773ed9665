//! Static descriptor of supported request kinds and their defaults.
//!
//! The descriptor is a fixed configuration payload built from the same
//! constants the generator applies, so the advertised defaults can never
//! drift from the generated behavior.

use crate::charset::LOWERCASE;
use crate::request::{
    DataKind, OutputFormat, DEFAULT_COLUMNS, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_ROWS,
    DEFAULT_SIZE,
};
use serde::Serialize;

/// Defaults applied to ARRAY requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayDefaults {
    /// Element count
    pub size: u32,
    /// Inclusive lower numeric bound
    pub min_value: i64,
    /// Inclusive upper numeric bound
    pub max_value: i64,
    /// Whether repeated values are acceptable
    pub allow_duplicates: bool,
    /// Whether the sequence is sorted
    pub is_sorted: bool,
}

/// Defaults applied to STRING requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringDefaults {
    /// String length
    pub length: u32,
    /// Character set drawn from
    pub charset: &'static str,
}

/// Defaults applied to MATRIX requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixDefaults {
    /// Row count
    pub rows: u32,
    /// Column count
    pub columns: u32,
    /// Inclusive lower numeric bound
    pub min_value: i64,
    /// Inclusive upper numeric bound
    pub max_value: i64,
}

/// Per-kind default values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindDefaults {
    /// ARRAY defaults
    pub array: ArrayDefaults,
    /// STRING defaults
    pub string: StringDefaults,
    /// MATRIX defaults
    pub matrix: MatrixDefaults,
}

/// Descriptor of supported data kinds, output formats, and defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsDescriptor {
    /// Supported data kinds
    pub data_kinds: Vec<DataKind>,
    /// Supported output formats
    pub output_formats: Vec<OutputFormat>,
    /// Default values per data kind
    pub defaults: KindDefaults,
}

impl ConstraintsDescriptor {
    /// Build the descriptor from the documented default constants.
    pub fn new() -> Self {
        Self {
            data_kinds: vec![
                DataKind::Array,
                DataKind::String,
                DataKind::Matrix,
                DataKind::Tree,
            ],
            output_formats: vec![OutputFormat::Json, OutputFormat::Csv, OutputFormat::PlainText],
            defaults: KindDefaults {
                array: ArrayDefaults {
                    size: DEFAULT_SIZE,
                    min_value: DEFAULT_MIN_VALUE,
                    max_value: DEFAULT_MAX_VALUE,
                    allow_duplicates: true,
                    is_sorted: false,
                },
                string: StringDefaults {
                    length: DEFAULT_SIZE,
                    charset: LOWERCASE,
                },
                matrix: MatrixDefaults {
                    rows: DEFAULT_ROWS,
                    columns: DEFAULT_COLUMNS,
                    min_value: DEFAULT_MIN_VALUE,
                    max_value: DEFAULT_MAX_VALUE,
                },
            },
        }
    }

    /// Render the descriptor as pretty-printed JSON.
    pub fn to_json_string(&self) -> String {
        // The descriptor holds only enums, integers, and static strings.
        serde_json::to_string_pretty(self).expect("descriptor always serializes")
    }
}

impl Default for ConstraintsDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

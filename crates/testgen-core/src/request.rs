//! Request model for test-case generation.
//!
//! A [`GenerationRequest`] carries the structural constraints for one test
//! case: the data kind to produce, element type, sizing, numeric bounds,
//! charset flags, and the output format. Every field except the data kind
//! is optional; resolved accessors apply the documented defaults so the
//! generator never re-derives them.

use crate::error::RequestError;
use serde::{Deserialize, Serialize};

/// Default element count for arrays and default string length.
pub const DEFAULT_SIZE: u32 = 10;

/// Default inclusive lower bound for numeric draws.
pub const DEFAULT_MIN_VALUE: i64 = -100;

/// Default inclusive upper bound for numeric draws.
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Default number of matrix rows.
pub const DEFAULT_ROWS: u32 = 3;

/// Default number of matrix columns.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Top-level structural category of generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataKind {
    /// Flat sequence of scalar elements
    Array,
    /// Single random string
    String,
    /// Two-dimensional grid of integers
    Matrix,
    /// Binary tree (generation not implemented)
    Tree,
}

/// Scalar type used to populate an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    /// Random integers in the request's numeric range
    Number,
    /// Single characters drawn from the derived charset
    Character,
    /// Strings of charset draws
    String,
}

/// Letter case of the derived charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseKind {
    /// Lowercase Latin letters only
    Lower,
    /// Uppercase Latin letters only
    Upper,
    /// Both lowercase and uppercase letters
    Mixed,
}

/// Serialization mode for the generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputFormat {
    /// Bracketed JSON rendering
    Json,
    /// Comma-separated values, one matrix row per line
    Csv,
    /// Space-separated values, one matrix row per line
    PlainText,
}

/// Structural constraints for one generated test case.
///
/// Deserializes from camelCase JSON. Unknown data or element kinds are
/// unrepresentable: the kind enums are closed, so unrecognized wire values
/// are rejected during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Data kind to generate (the only required field)
    data_kind: DataKind,

    /// Scalar type for array elements (default NUMBER)
    element_kind: Option<ElementKind>,

    /// Element count for arrays, length for strings (default 10)
    size: Option<u32>,

    /// Inclusive lower bound for numeric draws (default -100)
    min_value: Option<i64>,

    /// Inclusive upper bound for numeric draws (default 100)
    max_value: Option<i64>,

    /// Whether repeated values are acceptable (default true)
    allow_duplicates: Option<bool>,

    /// Whether the result sequence is sorted ascending (default false)
    is_sorted: Option<bool>,

    /// Explicit charset override
    charset: Option<String>,

    /// Matrix row count (default 3)
    rows: Option<u32>,

    /// Matrix column count (default 3)
    columns: Option<u32>,

    /// Length of string elements inside arrays (falls back to `size`)
    string_length: Option<u32>,

    /// Letter case for the derived charset (default LOWER)
    case_kind: Option<CaseKind>,

    /// Include the special-character set in the derived charset
    allow_special_chars: Option<bool>,

    /// Include a space in the derived charset
    allow_spaces: Option<bool>,

    /// Include digits in the derived charset
    allow_numbers: Option<bool>,

    /// Serialization mode for the result (default JSON)
    output_format: Option<OutputFormat>,
}

impl GenerationRequest {
    /// Create a request for the given data kind with every constraint unset.
    pub fn new(data_kind: DataKind) -> Self {
        Self {
            data_kind,
            element_kind: None,
            size: None,
            min_value: None,
            max_value: None,
            allow_duplicates: None,
            is_sorted: None,
            charset: None,
            rows: None,
            columns: None,
            string_length: None,
            case_kind: None,
            allow_special_chars: None,
            allow_spaces: None,
            allow_numbers: None,
            output_format: None,
        }
    }

    /// Set the element kind for array generation.
    pub fn with_element_kind(mut self, element_kind: ElementKind) -> Self {
        self.element_kind = Some(element_kind);
        self
    }

    /// Set the element count (arrays) or string length (strings).
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the inclusive lower bound for numeric draws.
    pub fn with_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Set the inclusive upper bound for numeric draws.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Set whether repeated values are acceptable.
    pub fn with_allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = Some(allow_duplicates);
        self
    }

    /// Set whether the result sequence is sorted ascending.
    pub fn with_is_sorted(mut self, is_sorted: bool) -> Self {
        self.is_sorted = Some(is_sorted);
        self
    }

    /// Set an explicit charset override.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the matrix row count.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the matrix column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the length of string elements inside arrays.
    pub fn with_string_length(mut self, string_length: u32) -> Self {
        self.string_length = Some(string_length);
        self
    }

    /// Set the letter case for the derived charset.
    pub fn with_case_kind(mut self, case_kind: CaseKind) -> Self {
        self.case_kind = Some(case_kind);
        self
    }

    /// Include the special-character set in the derived charset.
    pub fn with_allow_special_chars(mut self, allow: bool) -> Self {
        self.allow_special_chars = Some(allow);
        self
    }

    /// Include a space in the derived charset.
    pub fn with_allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = Some(allow);
        self
    }

    /// Include digits in the derived charset.
    pub fn with_allow_numbers(mut self, allow: bool) -> Self {
        self.allow_numbers = Some(allow);
        self
    }

    /// Set the serialization mode for the result.
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    /// The requested data kind.
    pub fn data_kind(&self) -> DataKind {
        self.data_kind
    }

    /// Element kind for arrays, defaulting to NUMBER.
    pub fn element_kind(&self) -> ElementKind {
        self.element_kind.unwrap_or(ElementKind::Number)
    }

    /// Element count or string length, defaulting to 10.
    pub fn size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    /// Inclusive lower numeric bound, defaulting to -100.
    pub fn min_value(&self) -> i64 {
        self.min_value.unwrap_or(DEFAULT_MIN_VALUE)
    }

    /// Inclusive upper numeric bound, defaulting to 100.
    pub fn max_value(&self) -> i64 {
        self.max_value.unwrap_or(DEFAULT_MAX_VALUE)
    }

    /// Whether repeated values are acceptable, defaulting to true.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates.unwrap_or(true)
    }

    /// Whether the result sequence is sorted, defaulting to false.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted.unwrap_or(false)
    }

    /// Explicit charset override, if any.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Matrix row count, defaulting to 3.
    pub fn rows(&self) -> u32 {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    /// Matrix column count, defaulting to 3.
    pub fn columns(&self) -> u32 {
        self.columns.unwrap_or(DEFAULT_COLUMNS)
    }

    /// Length of string elements inside arrays, falling back to `size`.
    pub fn string_length(&self) -> u32 {
        self.string_length.unwrap_or_else(|| self.size())
    }

    /// Letter case for the derived charset, defaulting to LOWER.
    pub fn case_kind(&self) -> CaseKind {
        self.case_kind.unwrap_or(CaseKind::Lower)
    }

    /// Whether special characters join the derived charset, defaulting to false.
    pub fn allow_special_chars(&self) -> bool {
        self.allow_special_chars.unwrap_or(false)
    }

    /// Whether a space joins the derived charset, defaulting to false.
    pub fn allow_spaces(&self) -> bool {
        self.allow_spaces.unwrap_or(false)
    }

    /// Whether digits join the derived charset, defaulting to false.
    pub fn allow_numbers(&self) -> bool {
        self.allow_numbers.unwrap_or(false)
    }

    /// Serialization mode for the result, defaulting to JSON.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Json)
    }

    /// Check the request invariants.
    ///
    /// Sizes and dimensions must be at least one, and the numeric range
    /// must satisfy min <= max wherever the request actually draws numbers
    /// (NUMBER arrays and matrices).
    pub fn validate(&self) -> Result<(), RequestError> {
        if let Some(size) = self.size {
            if size < 1 {
                return Err(RequestError::InvalidSize(size));
            }
        }

        if let Some(length) = self.string_length {
            if length < 1 {
                return Err(RequestError::InvalidStringLength(length));
            }
        }

        match self.data_kind {
            DataKind::Matrix => {
                let rows = self.rows();
                let columns = self.columns();
                if rows < 1 || columns < 1 {
                    return Err(RequestError::InvalidDimensions { rows, columns });
                }
                self.validate_range()?;
            }
            DataKind::Array => {
                if self.element_kind() == ElementKind::Number {
                    self.validate_range()?;
                }
            }
            DataKind::String | DataKind::Tree => {}
        }

        Ok(())
    }

    fn validate_range(&self) -> Result<(), RequestError> {
        let min = self.min_value();
        let max = self.max_value();
        if min > max {
            return Err(RequestError::InvalidRange { min, max });
        }
        Ok(())
    }
}

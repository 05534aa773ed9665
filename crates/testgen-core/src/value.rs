//! Value representations produced by the generator.
//!
//! A request yields exactly one [`GeneratedValue`], a closed tagged union
//! over the three output shapes. Sequence elements are themselves tagged
//! [`ElementValue`]s so a single sequence type covers number, character,
//! and string arrays without a heterogeneous grab-bag.

/// Scalar element of a generated sequence.
///
/// Derives `Ord` so sequences sort ascending under each kind's natural
/// order; a sequence only ever holds one variant, so cross-variant
/// ordering never matters in practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementValue {
    /// Integer element
    Int(i64),
    /// Single-character element
    Char(char),
    /// String element
    Str(String),
}

impl ElementValue {
    /// Try to get this element as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this element as a char.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get this element as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Output of a single generation request.
///
/// Produced transiently per request and handed straight to a formatter;
/// carries no identity beyond the request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// Flat sequence of scalar elements (ARRAY requests)
    Sequence(Vec<ElementValue>),
    /// Two-dimensional grid of integers (MATRIX requests)
    Grid(Vec<Vec<i64>>),
    /// Single raw string (STRING requests and placeholder results)
    Text(String),
}

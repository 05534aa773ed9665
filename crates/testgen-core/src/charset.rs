//! Per-request character set derivation.
//!
//! The charset eligible for character and string draws is rebuilt for every
//! request from the case kind and allow-flags, optionally combined with an
//! explicit override. The result is ephemeral; nothing caches it across
//! requests.

use crate::request::{CaseKind, GenerationRequest};

/// Lowercase Latin letters, also the fallback when derivation yields nothing.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase Latin letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits, enabled by `allow_numbers`.
pub const DIGITS: &str = "0123456789";

/// Fixed special-character set, enabled by `allow_special_chars`.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// How an explicit charset override combines with the derived set.
///
/// Character draws and whole-string generation use [`Replace`]; string
/// elements inside arrays use [`Append`]. The two paths are deliberately
/// asymmetric.
///
/// [`Replace`]: OverridePolicy::Replace
/// [`Append`]: OverridePolicy::Append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePolicy {
    /// An explicit override discards the derived set entirely.
    Replace,
    /// A non-empty explicit override is appended to the derived set.
    Append,
}

/// Build the set of characters eligible for drawing under the request.
///
/// Starts from the case-kind letter set (lowercase unless UPPER or MIXED),
/// appends digits, the special-character set, and a single space per the
/// allow-flags, then applies the explicit override per `policy`. An empty
/// result falls back to [`LOWERCASE`].
pub fn derive_charset(request: &GenerationRequest, policy: OverridePolicy) -> String {
    let mut charset = String::new();

    match request.case_kind() {
        CaseKind::Lower => charset.push_str(LOWERCASE),
        CaseKind::Upper => charset.push_str(UPPERCASE),
        CaseKind::Mixed => {
            charset.push_str(LOWERCASE);
            charset.push_str(UPPERCASE);
        }
    }

    if request.allow_numbers() {
        charset.push_str(DIGITS);
    }
    if request.allow_special_chars() {
        charset.push_str(SPECIAL_CHARS);
    }
    if request.allow_spaces() {
        charset.push(' ');
    }

    match (request.charset(), policy) {
        (Some(explicit), OverridePolicy::Replace) => charset = explicit.to_string(),
        (Some(explicit), OverridePolicy::Append) if !explicit.is_empty() => {
            charset.push_str(explicit)
        }
        _ => {}
    }

    if charset.is_empty() {
        charset = LOWERCASE.to_string();
    }

    charset
}

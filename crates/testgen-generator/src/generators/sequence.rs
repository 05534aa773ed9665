//! Sequence (array) generation with uniqueness and sort post-processing.

use crate::generators::{numeric, text};
use rand::Rng;
use std::collections::HashSet;
use testgen_core::charset::{derive_charset, OverridePolicy};
use testgen_core::{ElementKind, ElementValue, GenerationRequest};

/// Generate a sequence of `size` scalar elements of the requested kind.
///
/// When duplicates are disallowed, a freshly drawn value that already
/// exists in the sequence is discarded and the slot retried, without
/// bound. A charset or numeric range too small to supply `size` distinct
/// values makes this loop forever; callers are responsible for keeping
/// uniqueness requests feasible.
///
/// When `is_sorted` is requested, the sequence is ordered ascending under
/// the element kind's natural order.
pub fn generate_sequence<R: Rng>(rng: &mut R, request: &GenerationRequest) -> Vec<ElementValue> {
    let size = request.size() as usize;
    let element_kind = request.element_kind();

    // Character draws replace the derived charset with an explicit
    // override; string-element draws append it instead.
    let pool: Vec<char> = match element_kind {
        ElementKind::Number => Vec::new(),
        ElementKind::Character => derive_charset(request, OverridePolicy::Replace)
            .chars()
            .collect(),
        ElementKind::String => derive_charset(request, OverridePolicy::Append)
            .chars()
            .collect(),
    };

    let mut elements = Vec::with_capacity(size);
    let mut seen = HashSet::new();

    while elements.len() < size {
        let value = match element_kind {
            ElementKind::Number => {
                ElementValue::Int(numeric::int_range(rng, request.min_value(), request.max_value()))
            }
            ElementKind::Character => ElementValue::Char(text::random_char(rng, &pool)),
            ElementKind::String => ElementValue::Str(text::random_string(
                rng,
                &pool,
                request.string_length() as usize,
            )),
        };

        if !request.allow_duplicates() && !seen.insert(value.clone()) {
            continue;
        }

        elements.push(value);
    }

    if request.is_sorted() {
        elements.sort();
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use testgen_core::{CaseKind, DataKind};

    fn request() -> GenerationRequest {
        GenerationRequest::new(DataKind::Array)
    }

    #[test]
    fn test_number_elements_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request().with_size(100).with_min_value(-7).with_max_value(7);

        let elements = generate_sequence(&mut rng, &req);
        assert_eq!(elements.len(), 100);
        for element in &elements {
            let v = element.as_i64().expect("number array holds Int elements");
            assert!((-7..=7).contains(&v));
        }
    }

    #[test]
    fn test_character_elements_come_from_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(50)
            .with_element_kind(ElementKind::Character)
            .with_case_kind(CaseKind::Upper);

        let elements = generate_sequence(&mut rng, &req);
        for element in &elements {
            let c = element.as_char().expect("character array holds Char elements");
            assert!(c.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_string_elements_use_string_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(10)
            .with_element_kind(ElementKind::String)
            .with_string_length(4);

        let elements = generate_sequence(&mut rng, &req);
        for element in &elements {
            let s = element.as_str().expect("string array holds Str elements");
            assert_eq!(s.len(), 4);
        }
    }

    #[test]
    fn test_string_elements_fall_back_to_size_for_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(6)
            .with_element_kind(ElementKind::String);

        let elements = generate_sequence(&mut rng, &req);
        assert_eq!(elements.len(), 6);
        for element in &elements {
            assert_eq!(element.as_str().unwrap().len(), 6);
        }
    }

    #[test]
    fn test_string_element_override_appends_to_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(30)
            .with_element_kind(ElementKind::String)
            .with_string_length(20)
            .with_charset("999");

        // Lowercase letters remain eligible alongside the appended digits.
        let elements = generate_sequence(&mut rng, &req);
        let joined: String = elements
            .iter()
            .map(|e| e.as_str().unwrap())
            .collect();
        assert!(joined
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '9'));
        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_character_override_replaces_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(50)
            .with_element_kind(ElementKind::Character)
            .with_charset("ab");

        let elements = generate_sequence(&mut rng, &req);
        for element in &elements {
            let c = element.as_char().unwrap();
            assert!(c == 'a' || c == 'b');
        }
    }

    #[test]
    fn test_no_duplicates_when_disallowed() {
        let mut rng = StdRng::seed_from_u64(42);
        // 26 distinct characters available, exactly 26 requested.
        let req = request()
            .with_size(26)
            .with_element_kind(ElementKind::Character)
            .with_allow_duplicates(false);

        let elements = generate_sequence(&mut rng, &req);
        assert_eq!(elements.len(), 26);

        let distinct: HashSet<_> = elements.iter().collect();
        assert_eq!(distinct.len(), 26);
    }

    #[test]
    fn test_unique_numbers_in_tight_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(11)
            .with_min_value(0)
            .with_max_value(10)
            .with_allow_duplicates(false);

        let elements = generate_sequence(&mut rng, &req);
        let distinct: HashSet<_> = elements.iter().collect();
        assert_eq!(distinct.len(), 11);
    }

    #[test]
    fn test_sorted_sequences_are_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request().with_size(50).with_is_sorted(true);

        let elements = generate_sequence(&mut rng, &req);
        for window in elements.windows(2) {
            assert!(window[0] <= window[1]);
        }
    }

    #[test]
    fn test_sorted_string_elements_lexicographic() {
        let mut rng = StdRng::seed_from_u64(42);
        let req = request()
            .with_size(20)
            .with_element_kind(ElementKind::String)
            .with_string_length(3)
            .with_is_sorted(true);

        let elements = generate_sequence(&mut rng, &req);
        let strings: Vec<&str> = elements.iter().map(|e| e.as_str().unwrap()).collect();
        for window in strings.windows(2) {
            assert!(window[0] <= window[1]);
        }
    }
}

//! Character and string draws from a derived charset.

use rand::Rng;
use testgen_core::charset::{derive_charset, OverridePolicy};
use testgen_core::GenerationRequest;

/// Draw one character uniformly from the pool.
///
/// The pool is never empty: charset derivation falls back to lowercase
/// letters when nothing else is enabled.
pub fn random_char<R: Rng>(rng: &mut R, pool: &[char]) -> char {
    pool[rng.gen_range(0..pool.len())]
}

/// Draw a string of `length` independent characters from the pool.
pub fn random_string<R: Rng>(rng: &mut R, pool: &[char], length: usize) -> String {
    (0..length).map(|_| random_char(rng, pool)).collect()
}

/// Generate the raw string for a STRING request.
///
/// Builds one string of length `size` by repeated independent draws; an
/// explicit charset override replaces the derived set here.
pub fn generate_text<R: Rng>(rng: &mut R, request: &GenerationRequest) -> String {
    let pool: Vec<char> = derive_charset(request, OverridePolicy::Replace)
        .chars()
        .collect();
    random_string(rng, &pool, request.size() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use testgen_core::{CaseKind, DataKind};

    #[test]
    fn test_random_char_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ['x', 'y', 'z'];

        for _ in 0..100 {
            assert!(pool.contains(&random_char(&mut rng, &pool)));
        }
    }

    #[test]
    fn test_random_string_length_and_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ['a', 'b'];

        let s = random_string(&mut rng, &pool, 50);
        assert_eq!(s.len(), 50);
        assert!(s.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn test_generate_text_uses_request_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = GenerationRequest::new(DataKind::String).with_size(12);

        let s = generate_text(&mut rng, &request);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_text_override_replaces_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = GenerationRequest::new(DataKind::String)
            .with_size(40)
            .with_case_kind(CaseKind::Upper)
            .with_charset("01");

        let s = generate_text(&mut rng, &request);
        assert!(s.chars().all(|c| c == '0' || c == '1'));
    }
}

//! Matrix (grid) generation.

use crate::generators::numeric;
use rand::Rng;
use testgen_core::GenerationRequest;

/// Generate a `rows x columns` grid of independent random integers in
/// the request's inclusive numeric range.
pub fn generate_grid<R: Rng>(rng: &mut R, request: &GenerationRequest) -> Vec<Vec<i64>> {
    let min = request.min_value();
    let max = request.max_value();

    (0..request.rows())
        .map(|_| {
            (0..request.columns())
                .map(|_| numeric::int_range(rng, min, max))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use testgen_core::DataKind;

    #[test]
    fn test_grid_dimensions_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = GenerationRequest::new(DataKind::Matrix)
            .with_rows(5)
            .with_columns(2)
            .with_min_value(0)
            .with_max_value(9);

        let grid = generate_grid(&mut rng, &request);
        assert_eq!(grid.len(), 5);
        for row in &grid {
            assert_eq!(row.len(), 2);
            for &cell in row {
                assert!((0..=9).contains(&cell));
            }
        }
    }

    #[test]
    fn test_grid_uses_default_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = GenerationRequest::new(DataKind::Matrix);

        let grid = generate_grid(&mut rng, &request);
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 3));
    }
}

//! Main generator dispatching on the requested data kind.

use crate::generators::{grid, sequence, text};
use rand::rngs::StdRng;
use rand::SeedableRng;
use testgen_core::{DataKind, GeneratedValue, GenerationRequest};
use tracing::debug;

/// Fixed placeholder returned for TREE requests.
///
/// Tree generation is an explicit unimplemented branch: requesting it
/// yields this text as the generated value rather than an error.
pub const TREE_PLACEHOLDER: &str = "Tree generation not implemented yet";

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Request failed validation
    #[error("Invalid request: {0}")]
    Request(#[from] testgen_core::RequestError),
}

/// Produces randomized test-case values from structural requests.
///
/// The generator owns a seeded random number generator. Production callers
/// create one per request from OS entropy; tests inject a fixed seed for
/// reproducible draws.
pub struct TestCaseGenerator {
    /// Randomness source for all draws
    rng: StdRng,
}

impl TestCaseGenerator {
    /// Create a generator with a fixed seed for reproducible output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate a value tree for the given request.
    ///
    /// The request is validated first; a degenerate numeric range or a
    /// zero size/dimension is rejected before any drawing happens. TREE
    /// requests yield [`TREE_PLACEHOLDER`] as text rather than an error.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<GeneratedValue, GeneratorError> {
        request.validate()?;

        debug!(data_kind = ?request.data_kind(), "Dispatching generation");

        let value = match request.data_kind() {
            DataKind::Array => {
                GeneratedValue::Sequence(sequence::generate_sequence(&mut self.rng, request))
            }
            DataKind::String => {
                GeneratedValue::Text(text::generate_text(&mut self.rng, request))
            }
            DataKind::Matrix => {
                GeneratedValue::Grid(grid::generate_grid(&mut self.rng, request))
            }
            DataKind::Tree => GeneratedValue::Text(TREE_PLACEHOLDER.to_string()),
        };

        Ok(value)
    }
}

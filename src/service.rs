//! Service facade over the generator and formatters.
//!
//! Each operation is stateless and handles one request in isolation;
//! randomness is request-local, so concurrent callers never share state.

use testgen_core::{ConstraintsDescriptor, GenerationRequest};
use testgen_format::format_value;
use testgen_generator::{GeneratorError, TestCaseGenerator};
use tracing::info;

/// Generate a formatted test case with request-local randomness.
pub fn generate(request: &GenerationRequest) -> Result<String, GeneratorError> {
    generate_with(&mut TestCaseGenerator::from_entropy(), request)
}

/// Generate a formatted test case reproducibly from a caller-supplied seed.
pub fn generate_seeded(request: &GenerationRequest, seed: u64) -> Result<String, GeneratorError> {
    generate_with(&mut TestCaseGenerator::new(seed), request)
}

fn generate_with(
    generator: &mut TestCaseGenerator,
    request: &GenerationRequest,
) -> Result<String, GeneratorError> {
    info!(
        data_kind = ?request.data_kind(),
        element_kind = ?request.element_kind(),
        size = request.size(),
        charset = ?request.charset(),
        "Generating test case"
    );

    let value = generator.generate(request)?;
    Ok(format_value(&value, request.output_format()))
}

/// Fixed JSON descriptor of supported kinds, output formats, and defaults.
pub fn constraints() -> String {
    ConstraintsDescriptor::new().to_json_string()
}

/// Acknowledgement returned for every feedback submission.
pub const FEEDBACK_ACK: &str = "Feedback received";

/// Accept a feedback submission.
///
/// Feedback is acknowledged but not stored or processed.
pub fn submit_feedback(feedback: &str) -> String {
    info!(length = feedback.len(), "Received feedback");
    FEEDBACK_ACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::{DataKind, OutputFormat};

    #[test]
    fn test_generate_formats_default_json() {
        let request = GenerationRequest::new(DataKind::Array).with_size(3);
        let body = generate_seeded(&request, 42).unwrap();

        assert!(body.starts_with('['));
        assert!(body.ends_with(']'));
        assert_eq!(body.matches(',').count(), 2);
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let request = GenerationRequest::new(DataKind::Matrix)
            .with_output_format(OutputFormat::Csv);

        assert_eq!(
            generate_seeded(&request, 7).unwrap(),
            generate_seeded(&request, 7).unwrap()
        );
    }

    #[test]
    fn test_submit_feedback_acknowledges() {
        assert_eq!(submit_feedback("the matrix was too small"), FEEDBACK_ACK);
    }

    #[test]
    fn test_constraints_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&constraints()).unwrap();
        assert!(parsed["defaults"]["array"].is_object());
    }
}

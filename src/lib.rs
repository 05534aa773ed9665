//! TestGenie library
//!
//! Generates randomized test-case data (arrays, strings, matrices) for
//! algorithm-practice problems from structural constraints: size, value
//! range, charset, sortedness, and output format.
//!
//! # Workspace Crates
//!
//! The pipeline is split across dedicated crates:
//!
//! - `testgen-core` - Request model, value unions, charset derivation, defaults
//! - `testgen-generator` - RNG-injected value synthesis
//! - `testgen-format` - JSON / CSV / plain-text rendering
//!
//! This crate ties them together behind a small service facade and the
//! `testgenie` CLI binary.
//!
//! # Example
//!
//! ```rust
//! use testgen_core::{DataKind, GenerationRequest, OutputFormat};
//!
//! let request = GenerationRequest::new(DataKind::Array)
//!     .with_size(5)
//!     .with_output_format(OutputFormat::Csv);
//!
//! let body = testgenie::generate_seeded(&request, 42).unwrap();
//! assert_eq!(body.split(',').count(), 5);
//! ```

pub mod service;

// Re-exports for convenience
pub use service::{constraints, generate, generate_seeded, submit_feedback, FEEDBACK_ACK};
pub use testgen_core as core;
pub use testgen_format as format;
pub use testgen_generator as generator;

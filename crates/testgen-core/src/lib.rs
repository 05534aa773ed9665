//! Core types for the testgenie framework.
//!
//! This crate provides the foundational types used across the test-case
//! generation pipeline, including:
//!
//! - [`GenerationRequest`] - Structural constraints for a test case
//! - [`GeneratedValue`] / [`ElementValue`] - Tagged value trees produced per request
//! - [`ConstraintsDescriptor`] - Static descriptor of supported kinds and defaults
//! - [`RequestError`] - Validation failures for malformed requests
//! - [`charset`] - Per-request character set derivation
//!
//! # Architecture
//!
//! The testgen-core crate sits at the foundation of the pipeline:
//!
//! ```text
//! testgen-core (this crate)
//!    │
//!    ├─── testgen-generator  (depends on testgen-core for types)
//!    │
//!    └─── testgen-format     (renders GeneratedValue as JSON/CSV/plain text)
//! ```

pub mod charset;
pub mod constraints;
pub mod error;
pub mod request;
pub mod value;

// Re-exports for convenience
pub use constraints::ConstraintsDescriptor;
pub use error::RequestError;
pub use request::{CaseKind, DataKind, ElementKind, GenerationRequest, OutputFormat};
pub use value::{ElementValue, GeneratedValue};

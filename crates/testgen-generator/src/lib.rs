//! Randomized value generation for the testgenie framework.
//!
//! This crate provides the [`TestCaseGenerator`], which turns a validated
//! [`GenerationRequest`] into a [`GeneratedValue`] tree. The generator owns
//! its randomness source; seeding it explicitly makes every draw
//! reproducible.
//!
//! # Architecture
//!
//! ```text
//! GenerationRequest
//!        │
//!        ▼
//! ┌────────────────────┐
//! │  TestCaseGenerator │
//! │                    │
//! │  - rng (StdRng)    │
//! └─────────┬──────────┘
//!           │
//!           ▼
//! GeneratedValue { Sequence | Grid | Text }
//! ```
//!
//! # Example
//!
//! ```rust
//! use testgen_core::{DataKind, GeneratedValue, GenerationRequest};
//! use testgen_generator::TestCaseGenerator;
//!
//! let request = GenerationRequest::new(DataKind::Array).with_size(5);
//! let mut generator = TestCaseGenerator::new(42);
//!
//! let value = generator.generate(&request).unwrap();
//! if let GeneratedValue::Sequence(elements) = value {
//!     assert_eq!(elements.len(), 5);
//! }
//! ```
//!
//! [`GenerationRequest`]: testgen_core::GenerationRequest
//! [`GeneratedValue`]: testgen_core::GeneratedValue

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, TestCaseGenerator, TREE_PLACEHOLDER};

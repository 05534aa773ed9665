//! Individual value generators for the supported data kinds.
//!
//! Every draw helper is a free function generic over `R: Rng`, so callers
//! decide where randomness comes from.

pub mod grid;
pub mod numeric;
pub mod sequence;
pub mod text;

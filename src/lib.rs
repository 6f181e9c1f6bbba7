//! Format-agnostic, type-directed serialization runtime for generated bindings.

/// Writer/Reader contracts, encode/decode dispatch, and sum-type decode tables.
pub mod codec;

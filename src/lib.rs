//! Juggle - deterministic value conversion and coercion engine
//!
//! This crate re-exports all layers of the Juggle system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: juggle_debug      — Explanations and output formatters
//! Layer 1: juggle_engine     — Conversion protocol, equality, operators
//! Layer 0: juggle_foundation — Core types (Value, Convertible, Error)
//! ```

pub use juggle_debug as debug;
pub use juggle_engine as engine;
pub use juggle_foundation as foundation;

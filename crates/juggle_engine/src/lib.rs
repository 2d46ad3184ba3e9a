//! Conversion protocol, equality, and coercion-aware operators for Juggle.
//!
//! This crate provides:
//! - [`ConversionEngine`] - The deterministic conversion protocol
//!   (`to_number`, `to_string`, `to_boolean`, `resolve_to_primitive`)
//! - [`EngineLimits`] - Recursion bounds for a conversion run
//! - [`ConversionTrace`] - Rule-by-rule records from traced conversions
//! - Loose and strict equality, and explicit coercion-aware operators
//! - Numeric literal parsing and canonical number rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod equality;
pub mod number;
pub mod ops;
pub mod trace;

pub use convert::{
    ConversionEngine, EngineLimits, resolve_to_primitive, to_boolean, to_number, to_string,
};
pub use equality::{loose_equals, strict_equals};
pub use number::{numeric_value_of, parse_numeric_literal, render_number};
pub use trace::{CoercionEvent, CoercionStep, ConversionTrace};

//! Explanations and formatting for Juggle conversions.
//!
//! This crate provides:
//! - [`Explainer`] - Runs conversions in traced form and answers "why"
//! - [`Explanation`] - A conversion outcome with its rule-by-rule record
//! - [`HumanFormatter`], [`JsonFormatter`] - Output formatters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explain;
pub mod format;

pub use explain::{Explainer, Explanation, Operation};
pub use format::{ExplanationFormatter, HumanFormatter, JsonFormatter};

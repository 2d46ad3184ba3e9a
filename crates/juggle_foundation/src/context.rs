//! Conversion contexts.
//!
//! A context is fixed at the call site and selects the hook priority order
//! when a convertible value is resolved to a primitive.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The intent of a conversion, selecting hook priority order.
///
/// - [`Number`](Self::Number): numeric hooks are tried first.
/// - [`String`](Self::String): display hooks are tried first.
/// - [`Default`](Self::Default): no preference was expressed; uses the
///   numeric order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionContext {
    /// A numeric result is wanted.
    Number,
    /// A textual result is wanted.
    String,
    /// No preference; treated like [`Number`](Self::Number) for hook order.
    Default,
}

impl fmt::Display for ConversionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Default => write!(f, "default"),
        }
    }
}

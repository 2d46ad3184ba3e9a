//! Runtime type descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The runtime type of a [`Value`](crate::Value).
///
/// Used in error reporting and trace records to describe what kind of value
/// participated in a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The null marker (deliberate absence).
    Null,
    /// The undefined marker (never assigned).
    Undefined,
    /// Boolean type.
    Bool,
    /// 64-bit floating point number, including the NaN sentinel.
    Number,
    /// String type.
    String,
    /// Ordered list of values.
    List,
    /// Insertion-ordered string-keyed mapping.
    Map,
    /// Hook-bearing convertible value.
    Convertible,
}

impl Type {
    /// Returns true for non-container, non-hook-bearing types.
    ///
    /// Primitives are the only admissible results of resolving a value to a
    /// primitive.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Null | Self::Undefined | Self::Bool | Self::Number | Self::String
        )
    }

    /// Returns true for structurally composite types.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
            Self::Convertible => write!(f, "convertible"),
        }
    }
}

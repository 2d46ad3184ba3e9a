//! Error types for conversion operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! The not-a-number sentinel is *not* represented here: a failed numeric
//! parse yields `Number(NaN)`, a first-class value. Errors are reserved for
//! contract violations (a hook returning a non-primitive with no fallback)
//! and for the recursion depth guard.

use std::fmt;

use thiserror::Error;

use crate::context::ConversionContext;
use crate::types::Type;

/// Convenience result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for conversion operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional trail of coercion frames leading to the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches a coercion trail to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto the coercion trail, creating the trail if absent.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.context = Some(
            self.context
                .take()
                .unwrap_or_default()
                .with_frame(frame),
        );
        self
    }

    /// Creates a cannot-convert error.
    #[must_use]
    pub fn cannot_convert(from: Type, context: ConversionContext) -> Self {
        Self::new(ErrorKind::CannotConvert { from, context })
    }

    /// Creates a depth-exceeded error.
    #[must_use]
    pub fn depth_exceeded(limit: u32) -> Self {
        Self::new(ErrorKind::DepthExceeded { limit })
    }

    /// Creates a not-serializable error.
    #[must_use]
    pub fn not_serializable(from: Type) -> Self {
        Self::new(ErrorKind::NotSerializable { from })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A convertible's hooks could not produce a primitive.
    ///
    /// Raised when a context hook returns a non-primitive, or when every
    /// applicable fallback hook has been tried and none yielded a primitive.
    #[error("cannot convert {from} to a primitive in {context} context")]
    CannotConvert {
        /// The type that failed to resolve.
        from: Type,
        /// The context the resolution ran under.
        context: ConversionContext,
    },

    /// Container or hook recursion exceeded the configured bound.
    #[error("conversion depth limit ({limit}) exceeded")]
    DepthExceeded {
        /// The configured depth limit.
        limit: u32,
    },

    /// The value has no data representation (hooks are code, not data).
    #[error("{from} values cannot be serialized")]
    NotSerializable {
        /// The type that was rejected.
        from: Type,
    },
}

/// A trail of coercion frames describing where an error occurred.
///
/// Frames are pushed innermost-first as an error propagates outward, e.g.
/// `"in hook to_numeric_value of <money>"`, `"in list element 3"`.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Human-readable coercion frames, innermost first.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Adds a frame to the trail.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "  {frame}")?;
        }
        Ok(())
    }
}

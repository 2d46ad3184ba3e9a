//! Coercion trace records.
//!
//! Every conversion can be run in traced form, producing an ordered record
//! of the rules that fired. The untraced entry points run the same code
//! paths through a no-op sink, so tracing costs nothing when unused.

use std::sync::Arc;

use juggle_foundation::{ConversionContext, HookKind, Type};

/// A single rule application during a conversion.
#[derive(Clone, Debug)]
pub struct CoercionStep {
    /// Recursion depth at which the rule fired (0 = the outermost value).
    pub depth: u32,
    /// What happened.
    pub event: CoercionEvent,
}

/// The observable events of the conversion protocol.
#[derive(Clone, Debug)]
pub enum CoercionEvent {
    /// The value was already a primitive of this kind and passed through.
    Primitive {
        /// The primitive's type.
        kind: Type,
    },

    /// Null converted to zero.
    NullToZero,

    /// Undefined produced the NaN sentinel.
    UndefinedToNan,

    /// A boolean converted to 0 or 1.
    BoolToNumber {
        /// The boolean that was converted.
        value: bool,
    },

    /// A string was coerced through numeric literal parsing.
    StringParsed {
        /// The string content before trimming.
        input: Arc<str>,
        /// The parse result (the NaN sentinel on failure).
        result: f64,
    },

    /// A value received its fixed textual rendering.
    Rendered {
        /// The type that was rendered.
        kind: Type,
        /// The rendering.
        text: Arc<str>,
    },

    /// List elements were rendered and joined with commas.
    ListJoined {
        /// Number of elements joined.
        len: usize,
        /// The joined rendering.
        text: Arc<str>,
    },

    /// A hook was invoked and its result accepted.
    HookInvoked {
        /// The convertible's debug name.
        name: Arc<str>,
        /// Which hook fired.
        hook: HookKind,
        /// The context the resolution ran under.
        context: ConversionContext,
        /// The type of the value the hook returned.
        yielded: Type,
    },

    /// A hook returned a non-primitive; dispatch moved on (or failed, for
    /// the context hook, which has no fallback).
    HookSkipped {
        /// The convertible's debug name.
        name: Arc<str>,
        /// Which hook was skipped.
        hook: HookKind,
        /// The non-primitive type the hook returned.
        yielded: Type,
    },

    /// No applicable hook yielded a primitive.
    HooksExhausted {
        /// The convertible's debug name.
        name: Arc<str>,
        /// The context the resolution ran under.
        context: ConversionContext,
    },

    /// Truthiness was evaluated.
    Truthiness {
        /// The type that was tested.
        kind: Type,
        /// The verdict.
        result: bool,
    },

    /// The recursion depth limit was hit.
    DepthLimit {
        /// The configured limit.
        limit: u32,
    },
}

/// An ordered record of the rules a conversion applied.
#[derive(Clone, Debug, Default)]
pub struct ConversionTrace {
    steps: Vec<CoercionStep>,
}

impl ConversionTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[CoercionStep] {
        &self.steps
    }

    /// Returns an iterator over the recorded steps.
    pub fn iter(&self) -> impl Iterator<Item = &CoercionStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a ConversionTrace {
    type Item = &'a CoercionStep;
    type IntoIter = std::slice::Iter<'a, CoercionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Receiver for coercion steps during a conversion.
pub(crate) trait StepSink {
    fn record(&mut self, depth: u32, event: CoercionEvent);
}

/// Sink for untraced conversions.
pub(crate) struct NoTrace;

impl StepSink for NoTrace {
    fn record(&mut self, _depth: u32, _event: CoercionEvent) {}
}

impl StepSink for ConversionTrace {
    fn record(&mut self, depth: u32, event: CoercionEvent) {
        self.steps.push(CoercionStep { depth, event });
    }
}

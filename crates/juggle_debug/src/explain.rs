//! "Why" queries for conversions.
//!
//! An [`Explainer`] runs a conversion in traced form and packages the
//! result with the rule-by-rule record, answering questions like "why does
//! this string convert to NaN?" or "which hook produced this result?".

use juggle_engine::{ConversionEngine, ConversionTrace};
use juggle_foundation::{Error, Value};

/// Which conversion an explanation describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Conversion to a number.
    ToNumber,
    /// Conversion to a string.
    ToString,
    /// Conversion to a boolean.
    ToBoolean,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToNumber => write!(f, "to-number"),
            Self::ToString => write!(f, "to-string"),
            Self::ToBoolean => write!(f, "to-boolean"),
        }
    }
}

/// A conversion outcome together with the rules that produced it.
#[derive(Debug)]
pub struct Explanation {
    operation: Operation,
    input: String,
    outcome: Result<Value, Error>,
    trace: ConversionTrace,
}

impl Explanation {
    /// The conversion this explanation describes.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Diagnostic rendering of the input value.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The conversion result, or the error that stopped it.
    #[must_use]
    pub const fn outcome(&self) -> &Result<Value, Error> {
        &self.outcome
    }

    /// Returns true if the conversion produced a value.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// One-line rendering of the outcome.
    #[must_use]
    pub fn outcome_text(&self) -> String {
        match &self.outcome {
            Ok(value) => format!("{value:?}"),
            Err(error) => format!("error: {error}"),
        }
    }

    /// The rules applied, in order.
    #[must_use]
    pub const fn trace(&self) -> &ConversionTrace {
        &self.trace
    }
}

/// Runs conversions in traced form and packages explanations.
#[derive(Clone, Debug, Default)]
pub struct Explainer {
    engine: ConversionEngine,
}

impl Explainer {
    /// Creates an explainer with a default-configured engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an explainer around the given engine.
    #[must_use]
    pub const fn with_engine(engine: ConversionEngine) -> Self {
        Self { engine }
    }

    /// Explains a conversion to a number.
    #[must_use]
    pub fn explain_number(&self, value: &Value) -> Explanation {
        let (result, trace) = self.engine.to_number_traced(value);
        Explanation {
            operation: Operation::ToNumber,
            input: format!("{value:?}"),
            outcome: result.map(Value::Number),
            trace,
        }
    }

    /// Explains a conversion to a string.
    #[must_use]
    pub fn explain_string(&self, value: &Value) -> Explanation {
        let (result, trace) = self.engine.to_string_traced(value);
        Explanation {
            operation: Operation::ToString,
            input: format!("{value:?}"),
            outcome: result.map(Value::String),
            trace,
        }
    }

    /// Explains a conversion to a boolean.
    #[must_use]
    pub fn explain_boolean(&self, value: &Value) -> Explanation {
        let (result, trace) = self.engine.to_boolean_traced(value);
        Explanation {
            operation: Operation::ToBoolean,
            input: format!("{value:?}"),
            outcome: Ok(Value::Bool(result)),
            trace,
        }
    }
}

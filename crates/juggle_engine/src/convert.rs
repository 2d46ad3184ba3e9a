//! The conversion engine.
//!
//! Implements the fixed conversion protocol: a deterministic mapping from
//! any value to a number, string, or boolean, plus the resolve-to-primitive
//! step that consults a convertible's hooks in context-dependent priority
//! order. All operations are pure reads; the input is never mutated.

use std::sync::Arc;

use juggle_foundation::{ConversionContext, Error, HookKind, Result, Type, Value};

use crate::number::{numeric_value_of, render_number};
use crate::trace::{CoercionEvent, ConversionTrace, NoTrace, StepSink};

/// Semantic limits for a conversion run.
///
/// Values are persistent and acyclic, but nesting depth is unbounded, so
/// recursion is depth-counted: pathologically deep structures fail cleanly
/// instead of overflowing the stack.
#[derive(Clone, Copy, Debug)]
pub struct EngineLimits {
    /// Maximum recursion depth across containers and hook results.
    pub max_depth: u32,
}

impl EngineLimits {
    /// The default recursion bound.
    pub const DEFAULT_MAX_DEPTH: u32 = 64;

    /// Returns limits with the given depth bound.
    #[must_use]
    pub const fn with_max_depth(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// The conversion engine.
///
/// Stateless apart from its limits; freely shareable across threads. Every
/// `to_*` operation has a `*_traced` twin returning the same result plus a
/// [`ConversionTrace`] of the rules that fired.
#[derive(Clone, Debug, Default)]
pub struct ConversionEngine {
    limits: EngineLimits,
}

impl ConversionEngine {
    /// Creates an engine with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given limits.
    #[must_use]
    pub const fn with_limits(limits: EngineLimits) -> Self {
        Self { limits }
    }

    /// Returns the engine's limits.
    #[must_use]
    pub const fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// Converts a value to a number.
    ///
    /// The NaN sentinel is a *successful* result: an unparseable string or
    /// the undefined marker convert to NaN, not to an error.
    ///
    /// # Errors
    ///
    /// Fails when a convertible's hooks cannot produce a primitive, or when
    /// recursion exceeds the depth limit.
    pub fn to_number(&self, value: &Value) -> Result<f64> {
        self.number_impl(value, 0, &mut NoTrace)
    }

    /// Converts a value to a number, recording the rules applied.
    pub fn to_number_traced(&self, value: &Value) -> (Result<f64>, ConversionTrace) {
        let mut trace = ConversionTrace::new();
        let result = self.number_impl(value, 0, &mut trace);
        (result, trace)
    }

    /// Converts a value to a string.
    ///
    /// Total for primitives and containers.
    ///
    /// # Errors
    ///
    /// Fails only for a convertible whose hooks cannot produce a primitive,
    /// or when recursion exceeds the depth limit.
    pub fn to_string(&self, value: &Value) -> Result<Arc<str>> {
        self.string_impl(value, 0, &mut NoTrace)
    }

    /// Converts a value to a string, recording the rules applied.
    pub fn to_string_traced(&self, value: &Value) -> (Result<Arc<str>>, ConversionTrace) {
        let mut trace = ConversionTrace::new();
        let result = self.string_impl(value, 0, &mut trace);
        (result, trace)
    }

    /// Converts a value to a boolean. Total; never fails.
    ///
    /// Hooks are not consulted: any convertible is truthy, as is any
    /// container, empty or not.
    #[must_use]
    pub fn to_boolean(&self, value: &Value) -> bool {
        value.is_truthy()
    }

    /// Converts a value to a boolean, recording the verdict.
    #[must_use]
    pub fn to_boolean_traced(&self, value: &Value) -> (bool, ConversionTrace) {
        let mut trace = ConversionTrace::new();
        let result = value.is_truthy();
        trace.record(
            0,
            CoercionEvent::Truthiness {
                kind: value.value_type(),
                result,
            },
        );
        (result, trace)
    }

    /// Resolves a value to a primitive under the given context.
    ///
    /// Primitives pass through unchanged. A convertible is resolved through
    /// its hooks: the context hook, when present, fully determines the
    /// outcome; otherwise the two plain hooks are tried in context order,
    /// skipping any that return a non-primitive. Containers resolve through
    /// their built-in rendering (they have no numeric form of their own).
    ///
    /// # Errors
    ///
    /// Fails with `CannotConvert` when no applicable hook yields a
    /// primitive, and with `DepthExceeded` past the recursion bound.
    pub fn resolve_to_primitive(
        &self,
        value: &Value,
        context: ConversionContext,
    ) -> Result<Value> {
        self.resolve_impl(value, context, 0, &mut NoTrace)
    }

    /// Resolves a value to a primitive, recording the rules applied.
    pub fn resolve_traced(
        &self,
        value: &Value,
        context: ConversionContext,
    ) -> (Result<Value>, ConversionTrace) {
        let mut trace = ConversionTrace::new();
        let result = self.resolve_impl(value, context, 0, &mut trace);
        (result, trace)
    }

    fn guard<S: StepSink>(&self, depth: u32, sink: &mut S) -> Result<()> {
        if depth >= self.limits.max_depth {
            sink.record(
                depth,
                CoercionEvent::DepthLimit {
                    limit: self.limits.max_depth,
                },
            );
            return Err(Error::depth_exceeded(self.limits.max_depth));
        }
        Ok(())
    }

    pub(crate) fn number_impl<S: StepSink>(
        &self,
        value: &Value,
        depth: u32,
        sink: &mut S,
    ) -> Result<f64> {
        self.guard(depth, sink)?;
        match value {
            Value::Null => {
                sink.record(depth, CoercionEvent::NullToZero);
                Ok(0.0)
            }
            Value::Undefined => {
                sink.record(depth, CoercionEvent::UndefinedToNan);
                Ok(f64::NAN)
            }
            Value::Bool(b) => {
                sink.record(depth, CoercionEvent::BoolToNumber { value: *b });
                Ok(if *b { 1.0 } else { 0.0 })
            }
            Value::Number(n) => {
                sink.record(depth, CoercionEvent::Primitive { kind: Type::Number });
                Ok(*n)
            }
            Value::String(s) => {
                let result = numeric_value_of(s);
                sink.record(
                    depth,
                    CoercionEvent::StringParsed {
                        input: s.clone(),
                        result,
                    },
                );
                Ok(result)
            }
            Value::List(_) | Value::Map(_) | Value::Convertible(_) => {
                let primitive = self.resolve_impl(value, ConversionContext::Number, depth, sink)?;
                self.number_impl(&primitive, depth + 1, sink)
            }
        }
    }

    pub(crate) fn string_impl<S: StepSink>(
        &self,
        value: &Value,
        depth: u32,
        sink: &mut S,
    ) -> Result<Arc<str>> {
        self.guard(depth, sink)?;
        match value {
            Value::Null => Ok(rendered(depth, sink, Type::Null, "null")),
            Value::Undefined => Ok(rendered(depth, sink, Type::Undefined, "undefined")),
            Value::Bool(b) => {
                let text = if *b { "true" } else { "false" };
                Ok(rendered(depth, sink, Type::Bool, text))
            }
            Value::Number(n) => {
                let text = render_number(*n);
                Ok(rendered(depth, sink, Type::Number, &text))
            }
            Value::String(s) => {
                sink.record(depth, CoercionEvent::Primitive { kind: Type::String });
                Ok(s.clone())
            }
            Value::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    // Null and undefined render as empty string inside a
                    // list, unlike at top level.
                    if item.is_nullish() {
                        continue;
                    }
                    let text = self
                        .string_impl(item, depth + 1, sink)
                        .map_err(|e| e.with_frame(format!("in list element {i}")))?;
                    out.push_str(&text);
                }
                let text: Arc<str> = out.into();
                sink.record(
                    depth,
                    CoercionEvent::ListJoined {
                        len: items.len(),
                        text: text.clone(),
                    },
                );
                Ok(text)
            }
            Value::Map(_) => Ok(rendered(depth, sink, Type::Map, "[object Object]")),
            Value::Convertible(_) => {
                let primitive = self.resolve_impl(value, ConversionContext::String, depth, sink)?;
                self.string_impl(&primitive, depth + 1, sink)
            }
        }
    }

    pub(crate) fn resolve_impl<S: StepSink>(
        &self,
        value: &Value,
        context: ConversionContext,
        depth: u32,
        sink: &mut S,
    ) -> Result<Value> {
        self.guard(depth, sink)?;
        match value {
            Value::Null
            | Value::Undefined
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => {
                sink.record(
                    depth,
                    CoercionEvent::Primitive {
                        kind: value.value_type(),
                    },
                );
                Ok(value.clone())
            }
            Value::Convertible(c) => {
                let name: Arc<str> = c.name().into();

                // The context hook, when present, fully determines the
                // result; the other hooks are never consulted.
                if let Some(out) = c.invoke(HookKind::PrimitiveForContext, context) {
                    let yielded = out.value_type();
                    if yielded.is_primitive() {
                        sink.record(
                            depth,
                            CoercionEvent::HookInvoked {
                                name,
                                hook: HookKind::PrimitiveForContext,
                                context,
                                yielded,
                            },
                        );
                        return Ok(out);
                    }
                    sink.record(
                        depth,
                        CoercionEvent::HookSkipped {
                            name,
                            hook: HookKind::PrimitiveForContext,
                            yielded,
                        },
                    );
                    return Err(Error::cannot_convert(Type::Convertible, context).with_frame(
                        format!("in hook to_primitive_for_context of <{}>", c.name()),
                    ));
                }

                let order = match context {
                    ConversionContext::String => [HookKind::DisplayText, HookKind::NumericValue],
                    ConversionContext::Number | ConversionContext::Default => {
                        [HookKind::NumericValue, HookKind::DisplayText]
                    }
                };
                for kind in order {
                    if let Some(out) = c.invoke(kind, context) {
                        let yielded = out.value_type();
                        if yielded.is_primitive() {
                            sink.record(
                                depth,
                                CoercionEvent::HookInvoked {
                                    name: name.clone(),
                                    hook: kind,
                                    context,
                                    yielded,
                                },
                            );
                            return Ok(out);
                        }
                        sink.record(
                            depth,
                            CoercionEvent::HookSkipped {
                                name: name.clone(),
                                hook: kind,
                                yielded,
                            },
                        );
                    }
                }
                sink.record(depth, CoercionEvent::HooksExhausted { name, context });
                Err(Error::cannot_convert(Type::Convertible, context)
                    .with_frame(format!("resolving <{}>", c.name())))
            }
            // Containers behave like convertibles whose implicit display
            // hook is their built-in rendering; there is no numeric hook,
            // so every context lands on the rendering.
            Value::List(_) | Value::Map(_) => {
                let text = self.string_impl(value, depth + 1, sink)?;
                Ok(Value::String(text))
            }
        }
    }
}

fn rendered<S: StepSink>(depth: u32, sink: &mut S, kind: Type, text: &str) -> Arc<str> {
    let text: Arc<str> = text.into();
    sink.record(
        depth,
        CoercionEvent::Rendered {
            kind,
            text: text.clone(),
        },
    );
    text
}

/// Converts a value to a number with a default-configured engine.
///
/// # Errors
///
/// See [`ConversionEngine::to_number`].
pub fn to_number(value: &Value) -> Result<f64> {
    ConversionEngine::new().to_number(value)
}

/// Converts a value to a string with a default-configured engine.
///
/// # Errors
///
/// See [`ConversionEngine::to_string`].
pub fn to_string(value: &Value) -> Result<Arc<str>> {
    ConversionEngine::new().to_string(value)
}

/// Converts a value to a boolean with a default-configured engine.
#[must_use]
pub fn to_boolean(value: &Value) -> bool {
    ConversionEngine::new().to_boolean(value)
}

/// Resolves a value to a primitive with a default-configured engine.
///
/// # Errors
///
/// See [`ConversionEngine::resolve_to_primitive`].
pub fn resolve_to_primitive(value: &Value, context: ConversionContext) -> Result<Value> {
    ConversionEngine::new().resolve_to_primitive(value, context)
}

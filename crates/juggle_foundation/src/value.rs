//! Core value type for all Juggle data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{JgMap, JgVec};
use crate::context::ConversionContext;
use crate::types::Type;

/// Core value type for all Juggle data.
///
/// Values are immutable and cheaply cloneable (O(1) for most variants).
/// Composite values use structural sharing via persistent data structures,
/// and cloning preserves identity: a clone of a list *is* the same list for
/// the purposes of language-level equality.
#[derive(Clone)]
pub enum Value {
    /// The null marker (deliberate absence).
    Null,
    /// The undefined marker (never assigned).
    Undefined,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating point number.
    ///
    /// NaN is a first-class member: it is the sentinel result of a failed
    /// numeric conversion, not an error.
    Number(f64),
    /// String value.
    String(Arc<str>),
    /// Ordered list of values.
    List(JgVec<Value>),
    /// Insertion-ordered string-keyed mapping.
    Map(JgMap),
    /// Hook-bearing convertible value.
    Convertible(Convertible),
}

/// Hook taking no input and yielding a replacement value.
pub type Hook = Arc<dyn Fn() -> Value + Send + Sync>;

/// Hook receiving the conversion context and yielding a replacement value.
pub type ContextHook = Arc<dyn Fn(ConversionContext) -> Value + Send + Sync>;

/// Which hook of a convertible's hook set is being referred to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// The display-text hook, intended to yield a string.
    DisplayText,
    /// The numeric-value hook, intended to yield a number.
    NumericValue,
    /// The context hook; when present it takes total priority.
    PrimitiveForContext,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisplayText => write!(f, "to_display_text"),
            Self::NumericValue => write!(f, "to_numeric_value"),
            Self::PrimitiveForContext => write!(f, "to_primitive_for_context"),
        }
    }
}

/// A value carrying optional conversion hooks.
///
/// A convertible has *identity*: clones share it, separately built
/// convertibles never compare equal even with identical hooks. Hooks are
/// attached at construction time with the `with_*` builders; attaching a
/// hook produces a new identity, so finish building before sharing.
///
/// Hooks must be pure. They may return any value; the engine, never the
/// hook, decides whether a non-primitive result is acceptable.
#[derive(Clone)]
pub struct Convertible {
    inner: Arc<ConvertibleInner>,
}

struct ConvertibleInner {
    name: Arc<str>,
    display_text: Option<Hook>,
    numeric_value: Option<Hook>,
    primitive_for_context: Option<ContextHook>,
}

impl Convertible {
    /// Creates a hook-less convertible with the given debug name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            inner: Arc::new(ConvertibleInner {
                name: name.into(),
                display_text: None,
                numeric_value: None,
                primitive_for_context: None,
            }),
        }
    }

    /// Attaches a display-text hook.
    #[must_use]
    pub fn with_display_text(self, hook: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(ConvertibleInner {
                name: self.inner.name.clone(),
                display_text: Some(Arc::new(hook)),
                numeric_value: self.inner.numeric_value.clone(),
                primitive_for_context: self.inner.primitive_for_context.clone(),
            }),
        }
    }

    /// Attaches a numeric-value hook.
    #[must_use]
    pub fn with_numeric_value(self, hook: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(ConvertibleInner {
                name: self.inner.name.clone(),
                display_text: self.inner.display_text.clone(),
                numeric_value: Some(Arc::new(hook)),
                primitive_for_context: self.inner.primitive_for_context.clone(),
            }),
        }
    }

    /// Attaches a context hook, which takes total priority over the other two.
    #[must_use]
    pub fn with_primitive_for_context(
        self,
        hook: impl Fn(ConversionContext) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(ConvertibleInner {
                name: self.inner.name.clone(),
                display_text: self.inner.display_text.clone(),
                numeric_value: self.inner.numeric_value.clone(),
                primitive_for_context: Some(Arc::new(hook)),
            }),
        }
    }

    /// Returns the debug name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns true if the display-text hook is present.
    #[must_use]
    pub fn has_display_text(&self) -> bool {
        self.inner.display_text.is_some()
    }

    /// Returns true if the numeric-value hook is present.
    #[must_use]
    pub fn has_numeric_value(&self) -> bool {
        self.inner.numeric_value.is_some()
    }

    /// Returns true if the context hook is present.
    #[must_use]
    pub fn has_primitive_for_context(&self) -> bool {
        self.inner.primitive_for_context.is_some()
    }

    /// Invokes the named hook if present.
    ///
    /// `context` is forwarded to the context hook and ignored by the other
    /// two kinds.
    #[must_use]
    pub fn invoke(&self, kind: HookKind, context: ConversionContext) -> Option<Value> {
        match kind {
            HookKind::DisplayText => self.inner.display_text.as_ref().map(|hook| (**hook)()),
            HookKind::NumericValue => self.inner.numeric_value.as_ref().map(|hook| (**hook)()),
            HookKind::PrimitiveForContext => self
                .inner
                .primitive_for_context
                .as_ref()
                .map(|hook| (**hook)(context)),
        }
    }

    /// Returns true if both convertibles are the same allocation.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Convertible {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Convertible {}

impl Hash for Convertible {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.inner) as usize).hash(state);
    }
}

impl fmt::Debug for Convertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<convertible {}>", self.inner.name)
    }
}

impl Value {
    /// Builds a list value from an iterator of values.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::List(items.into_iter().collect())
    }

    /// Returns the runtime type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Undefined => Type::Undefined,
            Self::Bool(_) => Type::Bool,
            Self::Number(_) => Type::Number,
            Self::String(_) => Type::String,
            Self::List(_) => Type::List,
            Self::Map(_) => Type::Map,
            Self::Convertible(_) => Type::Convertible,
        }
    }

    /// Returns true if this value is the null marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this value is the undefined marker.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this value is null or undefined.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns true for non-container, non-hook-bearing values.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.value_type().is_primitive()
    }

    /// Returns true if this value is truthy.
    ///
    /// Exactly six values are falsy: null, undefined, `false`, zero, the
    /// not-a-number sentinel, and the empty string. Everything else is
    /// truthy, including an empty list, an empty mapping, and any
    /// convertible.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Undefined | Self::Bool(false) => false,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Bool(true) | Self::List(_) | Self::Map(_) | Self::Convertible(_) => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&JgVec<Self>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a mapping reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&JgMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a convertible reference.
    #[must_use]
    pub const fn as_convertible(&self) -> Option<&Convertible> {
        match self {
            Self::Convertible(c) => Some(c),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison.
//
// This is the *Rust-level* relation used by tests and hash containers:
// floats compare by bits (NaN == NaN, required for Eq reflexivity) and
// containers compare structurally. Language-level equality, where NaN is
// unequal to itself and containers compare by identity, lives in the engine.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Convertible(a), Self::Convertible(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null | Self::Undefined => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::List(v) => v.hash(state),
            Self::Map(m) => m.hash(state),
            Self::Convertible(c) => c.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(v) => write!(f, "{v:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
            Self::Convertible(c) => write!(f, "{c:?}"),
        }
    }
}

// Diagnostic rendering for logs and assertions. The *semantic* string
// conversion (with its `"1,2,3"` list joining and `"[object Object]"`
// mapping rendering) is an engine operation, not this impl.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Convertible(c) => write!(f, "{c:?}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    /// Note: converting large i64 values to f64 may lose precision.
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<JgVec<Value>> for Value {
    fn from(v: JgVec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<JgMap> for Value {
    fn from(m: JgMap) -> Self {
        Self::Map(m)
    }
}

impl From<Convertible> for Value {
    fn from(c: Convertible) -> Self {
        Self::Convertible(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

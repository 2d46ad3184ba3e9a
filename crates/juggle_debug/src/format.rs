//! Explanation output formatters.
//!
//! Provides human-readable and JSON formatters for explanations. In JSON
//! output, numbers are rendered canonically and quoted so the NaN sentinel
//! and infinities stay valid JSON.

use juggle_engine::{CoercionEvent, CoercionStep, render_number};

use crate::explain::Explanation;

/// Trait for formatting explanations.
pub trait ExplanationFormatter {
    /// Formats a single explanation to a string.
    fn format(&self, explanation: &Explanation) -> String;

    /// Formats multiple explanations.
    fn format_many(&self, explanations: &[&Explanation]) -> String {
        explanations
            .iter()
            .map(|e| self.format(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats explanations in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to indent steps by their recursion depth.
    pub show_depth: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to indent steps by depth.
    #[must_use]
    pub const fn with_depth(mut self) -> Self {
        self.show_depth = true;
        self
    }
}

impl ExplanationFormatter for HumanFormatter {
    fn format(&self, explanation: &Explanation) -> String {
        let mut out = format!(
            "{}({}) => {}\n",
            explanation.operation(),
            explanation.input(),
            explanation.outcome_text()
        );
        for (i, step) in explanation.trace().iter().enumerate() {
            let indent = if self.show_depth {
                "  ".repeat(step.depth as usize + 1)
            } else {
                "  ".to_string()
            };
            out.push_str(&format!("{indent}{}. {}\n", i + 1, describe(&step.event)));
        }
        out
    }
}

/// Formats explanations as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExplanationFormatter for JsonFormatter {
    fn format(&self, explanation: &Explanation) -> String {
        let mut out = String::from("{");
        out.push_str(&format!(
            "\"operation\":\"{}\",\"input\":{},\"outcome\":{},\"steps\":[",
            explanation.operation(),
            quote(explanation.input()),
            quote(&explanation.outcome_text()),
        ));
        for (i, step) in explanation.trace().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&step_json(step));
        }
        out.push_str("]}");
        out
    }
}

fn describe(event: &CoercionEvent) -> String {
    match event {
        CoercionEvent::Primitive { kind } => format!("{kind} passes through unchanged"),
        CoercionEvent::NullToZero => "null converts to 0".to_string(),
        CoercionEvent::UndefinedToNan => "undefined yields the NaN sentinel".to_string(),
        CoercionEvent::BoolToNumber { value } => {
            format!("{value} converts to {}", i32::from(*value))
        }
        CoercionEvent::StringParsed { input, result } => {
            format!(
                "string {input:?} parsed as numeric literal => {}",
                render_number(*result)
            )
        }
        CoercionEvent::Rendered { kind, text } => format!("{kind} renders as {text:?}"),
        CoercionEvent::ListJoined { len, text } => {
            format!("list of {len} elements joined => {text:?}")
        }
        CoercionEvent::HookInvoked {
            name,
            hook,
            context,
            yielded,
        } => format!("<{name}>.{hook} invoked in {context} context => {yielded}"),
        CoercionEvent::HookSkipped {
            name,
            hook,
            yielded,
        } => format!("<{name}>.{hook} returned non-primitive {yielded}; skipped"),
        CoercionEvent::HooksExhausted { name, context } => {
            format!("no hook of <{name}> produced a primitive in {context} context")
        }
        CoercionEvent::Truthiness { kind, result } => {
            format!("{kind} is {}", if *result { "truthy" } else { "falsy" })
        }
        CoercionEvent::DepthLimit { limit } => format!("depth limit {limit} reached"),
    }
}

fn step_json(step: &CoercionStep) -> String {
    let mut out = format!("{{\"depth\":{},", step.depth);
    match &step.event {
        CoercionEvent::Primitive { kind } => {
            out.push_str(&format!("\"event\":\"primitive\",\"kind\":\"{kind}\""));
        }
        CoercionEvent::NullToZero => out.push_str("\"event\":\"null-to-zero\""),
        CoercionEvent::UndefinedToNan => out.push_str("\"event\":\"undefined-to-nan\""),
        CoercionEvent::BoolToNumber { value } => {
            out.push_str(&format!("\"event\":\"bool-to-number\",\"value\":{value}"));
        }
        CoercionEvent::StringParsed { input, result } => {
            out.push_str(&format!(
                "\"event\":\"string-parsed\",\"input\":{},\"result\":{}",
                quote(input),
                quote(&render_number(*result))
            ));
        }
        CoercionEvent::Rendered { kind, text } => {
            out.push_str(&format!(
                "\"event\":\"rendered\",\"kind\":\"{kind}\",\"text\":{}",
                quote(text)
            ));
        }
        CoercionEvent::ListJoined { len, text } => {
            out.push_str(&format!(
                "\"event\":\"list-joined\",\"len\":{len},\"text\":{}",
                quote(text)
            ));
        }
        CoercionEvent::HookInvoked {
            name,
            hook,
            context,
            yielded,
        } => {
            out.push_str(&format!(
                "\"event\":\"hook-invoked\",\"name\":{},\"hook\":\"{hook}\",\"context\":\"{context}\",\"yielded\":\"{yielded}\"",
                quote(name)
            ));
        }
        CoercionEvent::HookSkipped {
            name,
            hook,
            yielded,
        } => {
            out.push_str(&format!(
                "\"event\":\"hook-skipped\",\"name\":{},\"hook\":\"{hook}\",\"yielded\":\"{yielded}\"",
                quote(name)
            ));
        }
        CoercionEvent::HooksExhausted { name, context } => {
            out.push_str(&format!(
                "\"event\":\"hooks-exhausted\",\"name\":{},\"context\":\"{context}\"",
                quote(name)
            ));
        }
        CoercionEvent::Truthiness { kind, result } => {
            out.push_str(&format!(
                "\"event\":\"truthiness\",\"kind\":\"{kind}\",\"result\":{result}"
            ));
        }
        CoercionEvent::DepthLimit { limit } => {
            out.push_str(&format!("\"event\":\"depth-limit\",\"limit\":{limit}"));
        }
    }
    out.push('}');
    out
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

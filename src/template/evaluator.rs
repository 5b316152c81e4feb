//! `{{path}}` placeholder evaluation.
//!
//! Placeholders are matched left to right, one at a time, and each is
//! resolved against the suggestion tree independently. Nested or
//! overlapping braces are not supported.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::MentionError;
use crate::mention::{resolve, split_path};

/// Marker substituted for unresolved placeholders unless configured otherwise.
pub const DEFAULT_NOT_FOUND: &str = "[Not Found]";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([\w.]+?)\s*\}\}").expect("placeholder pattern is valid")
});

/// What to do with placeholders that do not resolve to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Substituted for unresolved placeholders
    pub default_value: String,
    /// Fail on the first unresolved placeholder instead of substituting
    pub throw_on_error: bool,
    /// Leave unresolved placeholders exactly as written
    pub keep_unresolved: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            default_value: DEFAULT_NOT_FOUND.to_string(),
            throw_on_error: false,
            keep_unresolved: false,
        }
    }
}

impl EvaluationOptions {
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn with_throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    pub fn with_keep_unresolved(mut self, keep_unresolved: bool) -> Self {
        self.keep_unresolved = keep_unresolved;
        self
    }
}

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Path as written between the braces, without surrounding whitespace
    pub path: String,
    /// Byte range of the whole `{{ ... }}` token
    pub range: Range<usize>,
}

/// List every placeholder in `template`, in order.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?;
            Some(Placeholder {
                path: path.as_str().to_string(),
                range: whole.range(),
            })
        })
        .collect()
}

/// Resolve a placeholder path to a non-null value.
///
/// A path with no segments (`.`, `..`) never resolves.
pub fn lookup<'a>(path: &str, tree: &'a Value) -> Option<&'a Value> {
    let segments = split_path(path);
    if segments.is_empty() {
        return None;
    }
    match resolve(&segments, tree) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Text substituted for a resolved value.
///
/// Strings are inserted raw, containers as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace every `{{path}}` in `template` with its resolved value.
///
/// # Errors
/// Returns [`MentionError::Unresolved`] naming the first path that does not
/// resolve, but only when `options.throw_on_error` is set.
pub fn evaluate(
    template: &str,
    tree: &Value,
    options: &EvaluationOptions,
) -> Result<String, MentionError> {
    let mut rendered = String::with_capacity(template.len());
    let mut last_end = 0;

    for placeholder in placeholders(template) {
        rendered.push_str(&template[last_end..placeholder.range.start]);
        last_end = placeholder.range.end;

        match lookup(&placeholder.path, tree) {
            Some(value) => rendered.push_str(&format_value(value)),
            None if options.throw_on_error => {
                return Err(MentionError::Unresolved {
                    path: placeholder.path,
                });
            }
            None => {
                log::debug!("Failed to resolve path: {}", placeholder.path);
                if options.keep_unresolved {
                    rendered.push_str(&template[placeholder.range]);
                } else {
                    rendered.push_str(&options.default_value);
                }
            }
        }
    }

    rendered.push_str(&template[last_end..]);
    Ok(rendered)
}

/// Render a preview with default options. Never fails.
pub fn render_template(template: &str, tree: &Value) -> String {
    let options = EvaluationOptions::default();
    evaluate(template, tree, &options).unwrap_or_else(|_| template.to_string())
}

/// Evaluate every string inside a JSON value.
///
/// Objects and arrays are walked recursively; other values are copied.
/// Unresolved placeholders stay verbatim so the output can be evaluated
/// again once more data is available.
pub fn evaluate_properties(properties: &Value, tree: &Value) -> Value {
    let options = EvaluationOptions::default().with_keep_unresolved(true);

    match properties {
        Value::String(s) => match evaluate(s, tree, &options) {
            Ok(rendered) => Value::String(rendered),
            Err(_) => properties.clone(),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| evaluate_properties(item, tree))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), evaluate_properties(value, tree)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;

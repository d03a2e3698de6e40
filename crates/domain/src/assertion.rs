//! Strict deep-equality between an actual payload and an expected one.
//!
//! Equality is type-sensitive (`1` is not `"1"`, `1` is not `1.0`), ordered
//! for arrays and unordered for object keys. On mismatch the caller gets a
//! [`PayloadMismatch`] whose description lists every differing location.
//! The description is built only from the two values, so identical inputs
//! always produce identical text.

use std::fmt;

use serde_json::Value;

/// Header line of every payload mismatch description.
pub const MISMATCH_HEADER: &str = "Expected values to be strictly deep-equal:";

/// One location where the actual payload differs from the expected one.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Location in `$`, `$.key`, `$[0]` form.
    pub path: String,
    /// Value found at `path`, `None` if absent.
    pub actual: Option<Value>,
    /// Value required at `path`, `None` if it should be absent.
    pub expected: Option<Value>,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {}: + {} - {}",
            self.path,
            render_optional(self.actual.as_ref()),
            render_optional(self.expected.as_ref())
        )
    }
}

/// The actual payload was not strictly deep-equal to the expected one.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadMismatch {
    /// Payload observed on the expected branch.
    pub actual: Value,
    /// Payload the test required.
    pub expected: Value,
    /// Differing locations, in traversal order.
    pub differences: Vec<Difference>,
}

impl PayloadMismatch {
    /// Human-readable diff of the two payloads.
    #[must_use]
    pub fn description(&self) -> String {
        let mut out = String::from(MISMATCH_HEADER);
        out.push_str("\n+ actual - expected\n\n");
        push_prefixed(&mut out, '+', &self.actual);
        out.push('\n');
        push_prefixed(&mut out, '-', &self.expected);

        let nested: Vec<_> = self
            .differences
            .iter()
            .filter(|d| d.path != ROOT)
            .collect();
        if !nested.is_empty() {
            out.push_str("\n\nDifferences:");
            for difference in nested {
                out.push_str("\n  ");
                out.push_str(&difference.to_string());
            }
        }
        out
    }
}

impl fmt::Display for PayloadMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl std::error::Error for PayloadMismatch {}

const ROOT: &str = "$";

/// Compares `actual` against `expected`.
///
/// With no expectation the check is skipped and always passes.
///
/// # Errors
///
/// Returns a [`PayloadMismatch`] if the two values are not strictly
/// deep-equal.
pub fn assert_equal(actual: &Value, expected: Option<&Value>) -> Result<(), PayloadMismatch> {
    let Some(expected) = expected else {
        return Ok(());
    };
    if actual == expected {
        return Ok(());
    }

    let mut differences = Vec::new();
    collect_differences(ROOT, actual, expected, &mut differences);
    Err(PayloadMismatch {
        actual: actual.clone(),
        expected: expected.clone(),
        differences,
    })
}

fn collect_differences(path: &str, actual: &Value, expected: &Value, out: &mut Vec<Difference>) {
    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            let mut keys: Vec<&String> = actual_map.keys().chain(expected_map.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let child = format!("{path}.{key}");
                match (actual_map.get(key), expected_map.get(key)) {
                    (Some(a), Some(e)) => collect_differences(&child, a, e, out),
                    (a, e) => out.push(Difference {
                        path: child,
                        actual: a.cloned(),
                        expected: e.cloned(),
                    }),
                }
            }
        }
        (Value::Array(actual_items), Value::Array(expected_items)) => {
            let len = actual_items.len().max(expected_items.len());
            for index in 0..len {
                let child = format!("{path}[{index}]");
                match (actual_items.get(index), expected_items.get(index)) {
                    (Some(a), Some(e)) => collect_differences(&child, a, e, out),
                    (a, e) => out.push(Difference {
                        path: child,
                        actual: a.cloned(),
                        expected: e.cloned(),
                    }),
                }
            }
        }
        (a, e) if a != e => out.push(Difference {
            path: path.to_string(),
            actual: Some(a.clone()),
            expected: Some(e.clone()),
        }),
        _ => {}
    }
}

fn push_prefixed(out: &mut String, sign: char, value: &Value) {
    let rendered = render(value);
    for (index, line) in rendered.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push(if index == 0 { sign } else { ' ' });
        out.push(' ');
        out.push_str(line);
    }
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn render_optional(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_string(), Value::to_string)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deep null stripping through a serialize-and-replace pass.
//!
//! The input is serialized into a `serde_json::Value`, then a replacer walks
//! the tree top-down and decides for every node whether to keep it, swap it,
//! or omit it. What omission means depends on where the node sits:
//!
//! | Position       | `Replacement::Omit`                       |
//! |----------------|-------------------------------------------|
//! | object field   | the key disappears                        |
//! | array element  | the slot becomes `null` (indices survive) |
//! | root           | `StripError::RootOmitted`                 |
//!
//! [`strip_null`] is the replacer that omits every `null`. Because of the
//! table above, `null` fields vanish but `null` array elements stay:
//!
//! ```
//! use narrow::strip_null;
//! use serde_json::json;
//!
//! let stripped = strip_null(&json!({ "a": null, "b": [null, 1] })).unwrap();
//! assert_eq!(stripped, json!({ "b": [null, 1] }));
//! ```
//!
//! Dates come out as whatever string their `Serialize` impl writes (RFC 3339
//! for chrono). Non-finite floats have no JSON form and fail the pass with
//! [`StripError::Serialize`] instead of turning into `null`.

use crate::contracts::check_no_null_fields;
use crate::finite::Finite;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace, Level};

/// Error type for the stripping pass.
#[derive(Debug)]
pub enum StripError {
    /// The input could not be represented as JSON.
    Serialize(serde_json::Error),
    /// The stripped value did not fit the requested target type.
    Deserialize(serde_json::Error),
    /// The replacer omitted the root value, leaving nothing to return.
    RootOmitted,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::Serialize(e) => write!(f, "failed to serialize input: {}", e),
            StripError::Deserialize(e) => write!(f, "failed to deserialize stripped value: {}", e),
            StripError::RootOmitted => write!(f, "root value was omitted"),
        }
    }
}

impl std::error::Error for StripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StripError::Serialize(e) | StripError::Deserialize(e) => Some(e),
            StripError::RootOmitted => None,
        }
    }
}

/// What the replacer wants done with a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    Keep,
    Replace(Value),
    Omit,
}

// ============================================================================
// REPLACER PASS
// ============================================================================

/// Serialize `value` and run `replacer` over every node, top-down.
///
/// The replacer sees the root with key `None`, object fields with their name
/// and array elements with their decimal index. Whatever it returns is the
/// node that gets descended into next.
///
/// Fails with [`StripError::Serialize`] when the input holds a `NaN` or an
/// infinity anywhere.
pub fn replace_with<T, F>(value: &T, mut replacer: F) -> Result<Value, StripError>
where
    T: Serialize + ?Sized,
    F: FnMut(Option<&str>, &Value) -> Replacement,
{
    let root = serde_json::to_value(Finite(value)).map_err(|e| {
        debug!(error = %e, "input is not representable as JSON");
        StripError::Serialize(e)
    })?;

    apply(&mut replacer, None, root).ok_or(StripError::RootOmitted)
}

fn apply<F>(replacer: &mut F, key: Option<&str>, value: Value) -> Option<Value>
where
    F: FnMut(Option<&str>, &Value) -> Replacement,
{
    let value = match replacer(key, &value) {
        Replacement::Keep => value,
        Replacement::Replace(replaced) => replaced,
        Replacement::Omit => return None,
    };
    Some(descend(replacer, value))
}

fn descend<F>(replacer: &mut F, value: Value) -> Value
where
    F: FnMut(Option<&str>, &Value) -> Replacement,
{
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| {
                    apply(&mut *replacer, Some(k.as_str()), v).map(|v| (k, v))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| {
                    let key = i.to_string();
                    apply(&mut *replacer, Some(key.as_str()), v).unwrap_or(Value::Null)
                })
                .collect(),
        ),
        other => other,
    }
}

// ============================================================================
// NULL STRIPPING
// ============================================================================

/// Serialize `value` with every `null` object field removed, at any depth.
///
/// `null` array elements are kept as `null`. A value that serializes to a bare
/// `null` fails with [`StripError::RootOmitted`].
pub fn strip_null<T>(value: &T) -> Result<Value, StripError>
where
    T: Serialize + ?Sized,
{
    // Counts every `null` the replacer sees, array elements included.
    let mut nulls_seen = 0usize;
    let stripped = replace_with(value, |_, node| {
        if node.is_null() {
            nulls_seen += 1;
            Replacement::Omit
        } else {
            Replacement::Keep
        }
    })?;
    if tracing::enabled!(Level::TRACE) {
        let fields_removed = null_fields_removed(nulls_seen, &stripped);
        trace!(fields_removed, nulls_seen, "stripped null fields");
    }

    check_no_null_fields(&stripped);
    Ok(stripped)
}

/// How many of the `nulls_seen` were object fields.
///
/// Every `null` left in `stripped` is an array element the pass kept, so the
/// rest were removed fields.
fn null_fields_removed(nulls_seen: usize, stripped: &Value) -> usize {
    nulls_seen.saturating_sub(count_nulls(stripped))
}

fn count_nulls(value: &Value) -> usize {
    match value {
        Value::Null => 1,
        Value::Array(items) => items.iter().map(count_nulls).sum(),
        Value::Object(map) => map.values().map(count_nulls).sum(),
        _ => 0,
    }
}

/// Remove `null` object fields from an owned `Value`.
///
/// Same rule as [`strip_null`], except a bare `null` comes back as itself.
pub fn strip_null_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_null_value(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_null_value).collect()),
        other => other,
    }
}

/// Strip `value` and read the result back as `U`.
///
/// `U` is the null-free counterpart of `T`: typically the same record with
/// `Option` fields turned into `#[serde(default)]` ones, or dates as `String`.
pub fn strip_null_into<T, U>(value: &T) -> Result<U, StripError>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let stripped = strip_null(value)?;
    serde_json::from_value(stripped).map_err(|e| {
        debug!(error = %e, "stripped value does not fit target type");
        StripError::Deserialize(e)
    })
}

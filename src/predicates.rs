// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presence checks and dynamic key lookups.
//!
//! A value can be absent two ways: it was never there (`None`, a missing key)
//! or it is there and says so (`Value::Null`). Everything else is present,
//! including the falsy ones: `0`, `""`, `false`, `[]` and `{}`.
//!
//! ```
//! use narrow::{is_present_value, present};
//! use serde_json::json;
//!
//! let row = json!({ "count": 0, "note": null });
//! assert!(is_present_value(row.get("count")));
//! assert!(!is_present_value(row.get("note")));
//! assert!(!is_present_value(row.get("missing")));
//!
//! let names: Vec<&str> = present(vec![Some("a"), None, Some("")]).collect();
//! assert_eq!(names, ["a", ""]);
//! ```

use serde_json::Value;
use std::fmt;

// ============================================================================
// PRESENCE
// ============================================================================

/// True iff the option holds a value.
///
/// Takes a reference so it drops straight into `filter` closures.
#[inline]
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// True iff the value exists and is not JSON `null`.
#[inline]
pub fn is_present_value(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Keep only the present values of a sequence of options.
pub fn present<I, T>(values: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten()
}

/// True iff the value is a JSON string.
#[inline]
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

// ============================================================================
// PROPERTY KEYS
// ============================================================================

/// A dynamic property name: either a field name or a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(String),
    Index(usize),
}

impl PropertyKey {
    /// The index this key denotes, if any.
    ///
    /// Names count only when they are canonical decimals (`"3"`, not `"03"`).
    fn as_index(&self) -> Option<usize> {
        match self {
            PropertyKey::Index(i) => Some(*i),
            PropertyKey::Name(name) => parse_canonical_index(name),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        PropertyKey::Index(index)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => f.write_str(name),
            PropertyKey::Index(i) => write!(f, "{}", i),
        }
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let index: usize = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

/// Name that every array answers to without storing it.
const ARRAY_LENGTH: &str = "length";

// ============================================================================
// KEY MEMBERSHIP
// ============================================================================

/// True iff `key` names an existing property of `obj`.
///
/// - Objects: the key is one of its field names. An index matches the field
///   spelled as that decimal.
/// - Arrays: the index is in bounds, or the key is `"length"`.
/// - Anything else, `null` included: false.
pub fn is_key_of_object(key: impl Into<PropertyKey>, obj: &Value) -> bool {
    let key = key.into();
    match obj {
        Value::Object(map) => match &key {
            PropertyKey::Name(name) => map.contains_key(name.as_str()),
            PropertyKey::Index(i) => map.contains_key(i.to_string().as_str()),
        },
        Value::Array(items) => {
            if matches!(&key, PropertyKey::Name(name) if name == ARRAY_LENGTH) {
                return true;
            }
            key.as_index().is_some_and(|i| i < items.len())
        }
        _ => false,
    }
}

/// The value behind `key`, once `is_key_of_object` holds.
///
/// `"length"` on an array is a property but not a stored value, so it yields `None`.
pub fn lookup_key(key: impl Into<PropertyKey>, obj: &Value) -> Option<&Value> {
    let key = key.into();
    match obj {
        Value::Object(map) => match &key {
            PropertyKey::Name(name) => map.get(name.as_str()),
            PropertyKey::Index(i) => map.get(i.to_string().as_str()),
        },
        Value::Array(items) => key.as_index().and_then(|i| items.get(i)),
        _ => None,
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the narrowing operations.
//!
//! These are debug-mode assertions over results the public functions already
//! promise. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! | Contract Function        | Guarantee                                          |
//! |--------------------------|----------------------------------------------------|
//! | `check_distinct_literals`| a literal union spells each variant differently    |
//! | `check_no_null_fields`   | no object field is `null`, at any depth            |
//!
//! # Usage
//!
//! ```ignore
//! use narrow::contracts::*;
//!
//! // In debug builds, this panics if a `null` field slipped through
//! check_no_null_fields(&stripped);
//!
//! // In release builds, this is a no-op
//! ```

use serde_json::Value;

// ============================================================================
// REFINEMENT CONTRACTS
// ============================================================================

/// Check that no two variants of a literal union share a literal.
///
/// `refine_literal` returns the first variant whose literal matches, so a
/// repeated literal would make every later variant unreachable.
///
/// # Panics (debug builds only)
/// Panics with the first literal that appears twice.
#[inline]
pub fn check_distinct_literals<'a>(literals: impl IntoIterator<Item = &'a str>) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::BTreeSet::new();
        for literal in literals {
            debug_assert!(
                seen.insert(literal),
                "Contract violation: literal '{}' names more than one variant",
                literal
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = literals;
}

// ============================================================================
// STRIPPING CONTRACTS
// ============================================================================

/// Check that no object field anywhere in `value` is `null`.
///
/// `null` array elements are allowed.
///
/// # Panics (debug builds only)
/// Panics with the path of the first `null` field found.
#[inline]
pub fn check_no_null_fields(value: &Value) {
    #[cfg(debug_assertions)]
    {
        let found = first_null_field(value, &mut String::new());
        debug_assert!(
            found.is_none(),
            "Contract violation: null field at '{}'",
            found.unwrap_or_default()
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = value;
}

/// Path to the first `null` object field, e.g. `a.b[0].c`.
pub fn first_null_field(value: &Value, path: &mut String) -> Option<String> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let len = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(key);
                if child.is_null() {
                    return Some(path.clone());
                }
                if let Some(found) = first_null_field(child, path) {
                    return Some(found);
                }
                path.truncate(len);
            }
            None
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{}]", i));
                if let Some(found) = first_null_field(child, path) {
                    return Some(found);
                }
                path.truncate(len);
            }
            None
        }
        _ => None,
    }
}

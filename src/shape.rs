// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural shape checks for untyped JSON.
//!
//! A [`Shape`] lists the fields a record must carry and the primitive kind of
//! each. [`matches_shape`] answers whether a `Value` has them all; extra fields
//! are fine and nothing below the declared fields is inspected.
//!
//! ```
//! use narrow::{is_wordpress_api_category, narrow_shape, WordpressApiCategory};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "id": 1, "count": 2, "description": "d", "link": "l",
//!     "name": "n", "slug": "s", "parent": 0
//! });
//! assert!(is_wordpress_api_category(&raw));
//!
//! let category: WordpressApiCategory = narrow_shape(&raw).unwrap();
//! assert_eq!(category.slug, "s");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Primitive kind a shape field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON number, integer or float.
    Number,
    String,
}

impl FieldKind {
    /// True iff `value` is of this kind.
    #[inline]
    pub fn admits(self, value: &Value) -> bool {
        match self {
            FieldKind::Number => value.is_number(),
            FieldKind::String => value.is_string(),
        }
    }
}

/// A record shape: required field names and their primitive kinds.
pub trait Shape {
    const FIELDS: &'static [(&'static str, FieldKind)];
}

/// True iff `value` is an object carrying every field of `S` with the right kind.
///
/// `null`, arrays and primitives never match.
pub fn matches_shape<S: Shape>(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };

    // `null` admits neither kind, so a null field fails like a missing one.
    S::FIELDS
        .iter()
        .all(|(name, kind)| map.get(*name).is_some_and(|v| kind.admits(v)))
}

/// The typed record behind `value`, when it matches the shape.
pub fn narrow_shape<S>(value: &Value) -> Option<S>
where
    S: Shape + DeserializeOwned,
{
    if !matches_shape::<S>(value) {
        return None;
    }
    S::deserialize(value).ok()
}

// ============================================================================
// WORDPRESS CATEGORY
// ============================================================================

/// A category term as returned by the WordPress REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordpressApiCategory {
    /// Number of published posts for the term.
    pub count: Number,
    /// HTML description of the term.
    pub description: String,
    /// Unique identifier for the term.
    pub id: Number,
    /// URL of the term.
    pub link: String,
    /// HTML title for the term.
    pub name: String,
    /// The parent term ID.
    pub parent: Number,
    /// An alphanumeric identifier for the term unique to its type.
    pub slug: String,
}

impl Shape for WordpressApiCategory {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Number),
        ("count", FieldKind::Number),
        ("description", FieldKind::String),
        ("link", FieldKind::String),
        ("name", FieldKind::String),
        ("slug", FieldKind::String),
        ("parent", FieldKind::Number),
    ];
}

/// True iff `value` looks like a [`WordpressApiCategory`].
pub fn is_wordpress_api_category(value: &Value) -> bool {
    matches_shape::<WordpressApiCategory>(value)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime narrowing for loosely-typed values.
//!
//! Data that crosses a JSON boundary arrives as `serde_json::Value` or as
//! structs full of `Option`s. This crate narrows it back down:
//!
//! ```text
//! ┌───────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ predicates.rs │   │  refine.rs   │   │   strip.rs   │
//! │ (is_present,  │   │ (refine,     │   │ (strip_null, │
//! │  key lookup)  │   │  literal     │   │  replacer    │
//! ├───────────────┤   │  unions)     │   │  pass)       │
//! │   shape.rs    │   │              │   │              │
//! │ (field kinds) │   │              │   │              │
//! └───────────────┘   └──────┬───────┘   └──────┬───────┘
//!                            ▼                  ▼
//!                    ┌─────────────────────────────────┐
//!                    │          contracts.rs           │
//!                    │   (debug-only result checks)    │
//!                    └─────────────────────────────────┘
//! ```
//!
//! Everything is pure: inputs are borrowed or consumed, never mutated in place.
//!
//! # Absence
//!
//! There are two ways for a value to be absent: `None` (a missing key) and JSON
//! `null`. `0`, `""` and `false` are present values and stay that way.
//!
//! # Usage
//!
//! ```
//! use narrow::{is_wordpress_api_category, refine_literal, strip_null, EventName};
//! use serde_json::json;
//!
//! let event = refine_literal::<EventName>(Some("site_subscription_created"));
//! assert_eq!(event, Some(EventName::SiteSubscriptionCreated));
//!
//! let cleaned = strip_null(&json!({ "term": null, "ids": [null, 2] })).unwrap();
//! assert_eq!(cleaned, json!({ "ids": [null, 2] }));
//!
//! assert!(!is_wordpress_api_category(&cleaned));
//! ```
//!
//! # Features
//!
//! - `dates` (default): ISO date rendering via [`iso_date_string`], backed by chrono.

// Module declarations
pub mod contracts;
#[cfg(feature = "dates")]
mod dates;
mod finite;
mod generics;
mod predicates;
mod refine;
mod shape;
mod strip;

// Re-exports for public API
#[cfg(feature = "dates")]
pub use dates::{iso_date_string, IsoDate};
pub use generics::{singleton, Flagged};
pub use predicates::{
    is_key_of_object, is_present, is_present_value, is_string, lookup_key, present, PropertyKey,
};
pub use refine::{refine, refine_literal, EventName, LiteralUnion};
pub use shape::{
    is_wordpress_api_category, matches_shape, narrow_shape, FieldKind, Shape, WordpressApiCategory,
};
pub use strip::{
    replace_with, strip_null, strip_null_into, strip_null_value, Replacement, StripError,
};

// Paths used by `literal_union!` expansions in downstream crates.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small generic wrappers.

use serde::{Deserialize, Serialize};

/// Wrap a single value in a `Vec`.
#[inline]
pub fn singleton<T>(input: T) -> Vec<T> {
    vec![input]
}

/// A record extended with a `someOtherField: true` flag.
///
/// Serializes as the fields of `T` followed by the flag, so `T` must
/// serialize as a map (a struct or a map type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flagged<T> {
    #[serde(flatten)]
    pub inner: T,
    pub some_other_field: bool,
}

impl<T> Flagged<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            some_other_field: true,
        }
    }
}

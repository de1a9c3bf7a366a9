//! Deep null stripping properties.

use super::common::{array_lengths, assert_no_null_fields, json_strategy, null_free_json_strategy};
use narrow::{strip_null, strip_null_value, StripError};
use proptest::prelude::*;

proptest! {
    /// Property: no object field is `null` after stripping, at any depth.
    #[test]
    fn prop_strip_leaves_no_null_fields(value in json_strategy()) {
        match strip_null(&value) {
            Ok(stripped) => assert_no_null_fields(&stripped),
            Err(StripError::RootOmitted) => prop_assert!(value.is_null()),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Property: arrays keep their length, `null` elements included.
    #[test]
    fn prop_strip_keeps_array_positions(value in json_strategy()) {
        prop_assume!(!value.is_null());
        let stripped = strip_null(&value).unwrap();
        prop_assert_eq!(array_lengths(&stripped), array_lengths(&value));
    }

    /// Property: null-free input comes back unchanged.
    #[test]
    fn prop_strip_is_identity_on_null_free(value in null_free_json_strategy()) {
        prop_assert_eq!(strip_null(&value).unwrap(), value);
    }

    /// Property: stripping twice is the same as stripping once.
    #[test]
    fn prop_strip_is_idempotent(value in json_strategy()) {
        prop_assume!(!value.is_null());
        let once = strip_null(&value).unwrap();
        prop_assert_eq!(strip_null(&once).unwrap(), once);
    }

    /// Property: the owned-value stripper agrees with the serializing one.
    #[test]
    fn prop_owned_and_serialized_agree(value in json_strategy()) {
        prop_assume!(!value.is_null());
        prop_assert_eq!(strip_null_value(value.clone()), strip_null(&value).unwrap());
    }

    /// Property: the input is never mutated.
    #[test]
    fn prop_strip_does_not_mutate(value in json_strategy()) {
        let before = value.clone();
        let _ = strip_null(&value);
        prop_assert_eq!(value, before);
    }
}

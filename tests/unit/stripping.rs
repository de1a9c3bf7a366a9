//! Null stripping through the public API.

use super::common::assert_no_null_fields;
use narrow::{replace_with, strip_null, strip_null_into, Replacement, StripError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize)]
struct Profile {
    name: String,
    nickname: Option<String>,
    address: Option<Address>,
    scores: Vec<Option<u32>>,
}

#[derive(Serialize)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct CleanProfile {
    name: String,
    #[serde(default)]
    nickname: Option<String>,
    address: CleanAddress,
    scores: Vec<Option<u32>>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct CleanAddress {
    city: String,
}

fn profile() -> Profile {
    Profile {
        name: "ada".to_string(),
        nickname: None,
        address: Some(Address {
            city: "london".to_string(),
            zip: None,
        }),
        scores: vec![Some(3), None],
    }
}

#[test]
fn test_field_null_removed_element_null_kept() {
    let stripped = strip_null(&json!({ "a": null, "b": [null, 1] })).unwrap();
    assert_eq!(stripped, json!({ "b": [null, 1] }));
    assert!(stripped.get("a").is_none());
}

#[test]
fn test_struct_options_are_dropped() {
    let stripped = strip_null(&profile()).unwrap();
    assert_eq!(
        stripped,
        json!({
            "name": "ada",
            "address": { "city": "london" },
            "scores": [3, null]
        })
    );
    assert_no_null_fields(&stripped);
}

#[test]
fn test_strip_into_target_type() {
    let clean: CleanProfile = strip_null_into(&profile()).unwrap();
    assert_eq!(
        clean,
        CleanProfile {
            name: "ada".to_string(),
            nickname: None,
            address: CleanAddress {
                city: "london".to_string()
            },
            scores: vec![Some(3), None],
        }
    );
}

#[test]
fn test_missing_required_field_after_strip() {
    let mut partial = profile();
    partial.address = None;

    let err = strip_null_into::<_, CleanProfile>(&partial).unwrap_err();
    assert!(matches!(err, StripError::Deserialize(_)));
    assert!(err.to_string().contains("address"));
}

#[test]
fn test_bare_null_root() {
    let err = strip_null(&Value::Null).unwrap_err();
    assert!(matches!(err, StripError::RootOmitted));
    assert_eq!(err.to_string(), "root value was omitted");
}

#[test]
fn test_non_finite_field_is_an_error() {
    #[derive(Serialize)]
    struct Reading {
        sensor: &'static str,
        value: Option<f64>,
    }

    let reading = Reading {
        sensor: "t1",
        value: Some(f64::INFINITY),
    };
    let err = strip_null(&reading).unwrap_err();
    assert!(matches!(err, StripError::Serialize(_)));

    let missing = Reading {
        sensor: "t1",
        value: None,
    };
    assert_eq!(strip_null(&missing).unwrap(), json!({ "sensor": "t1" }));
}

#[test]
fn test_custom_replacer_redacts() {
    let redacted = replace_with(&json!({ "user": "ada", "token": "s3cr3t" }), |key, _| {
        if key == Some("token") {
            Replacement::Replace(json!("***"))
        } else {
            Replacement::Keep
        }
    })
    .unwrap();
    assert_eq!(redacted, json!({ "user": "ada", "token": "***" }));
}

#[cfg(feature = "dates")]
#[test]
fn test_dates_become_strings() {
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Serialize)]
    struct Post {
        published: DateTime<Utc>,
        edited: Option<DateTime<Utc>>,
    }

    let post = Post {
        published: Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap(),
        edited: None,
    };
    assert_eq!(
        strip_null(&post).unwrap(),
        json!({ "published": "2023-06-01T08:00:00Z" })
    );
}

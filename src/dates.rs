// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Calendar-date rendering for possibly-missing dates.
//!
//! The return type follows the argument: a date gives a `String`, an
//! `Option` of a date gives an `Option<String>`. Zoned timestamps are
//! converted to UTC before the date is taken.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

/// Something that can be rendered as an ISO calendar date (`YYYY-MM-DD`).
pub trait IsoDate {
    type Output;

    fn iso_date(&self) -> Self::Output;
}

impl<Tz: TimeZone> IsoDate for DateTime<Tz> {
    type Output = String;

    fn iso_date(&self) -> String {
        self.with_timezone(&Utc).date_naive().format(ISO_DATE).to_string()
    }
}

impl IsoDate for NaiveDate {
    type Output = String;

    fn iso_date(&self) -> String {
        self.format(ISO_DATE).to_string()
    }
}

impl<D: IsoDate<Output = String>> IsoDate for Option<D> {
    type Output = Option<String>;

    fn iso_date(&self) -> Option<String> {
        self.as_ref().map(IsoDate::iso_date)
    }
}

impl<D: IsoDate + ?Sized> IsoDate for &D {
    type Output = D::Output;

    fn iso_date(&self) -> D::Output {
        (**self).iso_date()
    }
}

/// Render `date` as `YYYY-MM-DD`; `None` stays `None`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use narrow::iso_date_string;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
/// assert_eq!(iso_date_string(at), "2024-03-09");
/// assert_eq!(iso_date_string(Some(at)), Some("2024-03-09".to_string()));
/// assert_eq!(iso_date_string(None::<chrono::DateTime<Utc>>), None);
/// ```
pub fn iso_date_string<D: IsoDate>(date: D) -> D::Output {
    date.iso_date()
}

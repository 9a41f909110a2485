//! Birthday parsing and congratulation-date arithmetic.
//!
//! # Responsibility
//! - Parse strict `DD.MM.YYYY` birthday input.
//! - Decide whether a birthday falls inside the upcoming 7-day window and
//!   compute the reported congratulation date.
//!
//! # Invariants
//! - The inclusion test always uses the pre-shift candidate date; the
//!   weekend shift only changes the reported date. A Saturday exactly 7
//!   days out is therefore reported as a Monday outside the window but is
//!   still included.
//! - Feb 29 projected onto a non-leap year resolves to Mar 1.

use crate::model::record::{ContactError, ContactResult};
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Birthdays up to this many whole days ahead are reported.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

// Chrono's %d/%m parsing tolerates single-digit fields, so the exact
// two-dot, zero-padded shape is pinned here before handing off to chrono.
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// Parses `DD.MM.YYYY` into a calendar date.
///
/// # Errors
/// - `InvalidBirthday` when the shape is wrong or the date does not exist
///   (e.g. `31.02.2020`).
pub fn parse_birthday(text: &str) -> ContactResult<NaiveDate> {
    if !BIRTHDAY_RE.is_match(text) {
        return Err(ContactError::InvalidBirthday(text.to_string()));
    }
    NaiveDate::parse_from_str(text, "%d.%m.%Y")
        .map_err(|_| ContactError::InvalidBirthday(text.to_string()))
}

/// Returns the congratulation date when `birthday` is at most 7 days after
/// `today`, otherwise `None`.
///
/// The birthday's month/day are projected onto `today`'s year, rolling over
/// to the next year when the projection has already passed. Candidates on a
/// Saturday or Sunday are reported on the following Monday.
pub fn upcoming_congratulation(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut candidate = project_onto_year(birthday, today.year());
    if candidate < today {
        candidate = project_onto_year(birthday, today.year() + 1);
    }

    let days_until = (candidate - today).num_days();
    if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
        return None;
    }

    Some(shift_off_weekend(candidate))
}

fn project_onto_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        // Only Feb 29 can fail to project; roll over to the day after Feb 28.
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("Mar 1 exists in every year")
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}

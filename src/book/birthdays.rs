//! Upcoming birthday computation.
//!
//! Projects each birthday onto the current year (or the next one if it has
//! already passed), keeps those inside the window, and moves weekend dates to
//! the following Monday.

use crate::domain::birthday::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Default look-ahead window in days, inclusive of both ends.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day the greeting should be sent, never on a weekend
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Collect upcoming birthdays for `records`, in iteration order.
///
/// A birthday whose anniversary does not exist in the projected year
/// (29 February outside a leap year) is skipped.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let next = next_anniversary(birthday, today)?;

            let delta = (next - today).num_days();
            if !(0..=i64::from(window_days)).contains(&delta) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: shift_weekend(next)?,
            })
        })
        .collect()
}

/// The first anniversary of `birthday` on or after `today`.
fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day())?;
    if this_year >= today {
        return Some(this_year);
    }
    NaiveDate::from_ymd_opt(today.year() + 1, birthday.month(), birthday.day())
}

/// Move Saturday and Sunday to the following Monday.
fn shift_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

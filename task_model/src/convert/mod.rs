use crate::err::{ModelError, Result};
use crate::flags::DaysOfMonth;
use chrono::{DateTime, NaiveDateTime};
use std::sync::LazyLock;

pub mod period;

pub use period::Period;

/// The three textual timestamp forms the scheduler accepts. Initialized once
/// at startup and never mutated afterwards.
pub struct TaskDateFormats {
    pub local: &'static str,
    pub with_offset: &'static str,
    pub utc: &'static str,
}

pub static TASK_DATE_FORMATS: LazyLock<TaskDateFormats> = LazyLock::new(|| TaskDateFormats {
    local: "%Y-%m-%dT%H:%M:%S",
    with_offset: "%Y-%m-%dT%H:%M:%S%:z",
    utc: "%Y-%m-%dT%H:%M:%SZ",
});

/// Render a timestamp in the scheduler's bare local form.
/// The unset timestamp renders as the empty string.
pub fn datetime_to_task_date(t: Option<NaiveDateTime>) -> String {
    match t {
        Some(t) => t.format(TASK_DATE_FORMATS.local).to_string(),
        None => String::new(),
    }
}

/// Parse any of the three timestamp forms back to a timestamp.
///
/// Form detection mirrors the scheduler's own fields: a `+` or a third `-`
/// means an explicit UTC offset, a trailing `Z` means UTC, anything else is
/// the bare local form. The empty string is the unset timestamp.
pub fn task_date_to_datetime(s: &str) -> Result<Option<NaiveDateTime>> {
    if s.is_empty() {
        return Ok(None);
    }

    let parsed = if s.matches('-').count() == 3 || s.contains('+') {
        DateTime::parse_from_str(s, TASK_DATE_FORMATS.with_offset).map(|t| t.naive_local())
    } else if s.ends_with('Z') {
        NaiveDateTime::parse_from_str(s, TASK_DATE_FORMATS.utc)
    } else {
        NaiveDateTime::parse_from_str(s, TASK_DATE_FORMATS.local)
    };

    match parsed {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ModelError::InvalidTaskDate(s.to_string(), e.to_string())),
    }
}

/// Render a period in the scheduler's duration form.
/// The zero period renders as the empty string, never as "P0D".
pub fn period_to_string(p: &Period) -> String {
    if p.is_zero() {
        return String::new();
    }
    p.to_string()
}

/// Parse a scheduler duration field. The empty string is the zero period.
pub fn string_to_period(s: &str) -> Result<Period> {
    if s.is_empty() {
        return Ok(Period::default());
    }
    Period::parse(s)
}

/// Map a 1-based calendar day to its single-bit set. Day 32 is the
/// "last day of month" sentinel; anything outside 1..=32 is rejected.
pub fn int_to_day_of_month(day: u32) -> Result<DaysOfMonth> {
    if !(1..=32).contains(&day) {
        return Err(ModelError::InvalidDayOfMonth(day));
    }
    // Bit i encodes calendar day i+1, so day 5 is 1 << 4, not 1 << 5.
    Ok(DaysOfMonth::from_bits_truncate(1u32 << (day - 1)))
}

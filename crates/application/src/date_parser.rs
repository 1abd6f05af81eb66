//! Date/time token parsing
//!
//! Accepts `yyyy/MM/dd HHmm`, `yyyy/MM/dd`, and the relative keywords
//! `today` and `tomorrow`. Every failure collapses to
//! [`DomainError::InvalidDateTime`].

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use domain::DomainError;
use tracing::debug;

/// Layout of a date token; `#` stands for one ASCII digit
const DATE_LAYOUT: &str = "####/##/##";

/// Layout of a date-and-time token
const DATE_TIME_LAYOUT: &str = "####/##/## ####";

/// Parse a date/time token relative to the local current date
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DomainError> {
    parse_date_time_on(input, Local::now().date_naive())
}

/// Parse a date/time token, resolving relative keywords against `today`
///
/// Resolution order, first match wins:
/// 1. `today` → start of `today`
/// 2. `tomorrow` → end of the following day
/// 3. text containing a space → `yyyy/MM/dd HHmm`
/// 4. anything else → `yyyy/MM/dd` at start of day
pub fn parse_date_time_on(input: &str, today: NaiveDate) -> Result<NaiveDateTime, DomainError> {
    let parsed = if let Some(instant) = parse_relative(input, today) {
        Some(instant)
    } else if input.contains(' ') {
        parse_date_with_time(input)
    } else {
        parse_date_only(input)
    };

    match parsed {
        Some(instant) => {
            debug!(input = %input, instant = %instant, "Parsed date/time");
            Ok(instant)
        },
        None => {
            debug!(input = %input, "Failed to parse date/time");
            Err(DomainError::InvalidDateTime)
        },
    }
}

/// Resolve `today` and `tomorrow`
///
/// `today` is the start of the day while `tomorrow` is the last instant of
/// the following day.
fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    if input.eq_ignore_ascii_case("today") {
        Some(today.and_time(NaiveTime::MIN))
    } else if input.eq_ignore_ascii_case("tomorrow") {
        let tomorrow = today.checked_add_signed(Duration::days(1))?;
        Some(tomorrow.and_time(end_of_day()))
    } else {
        None
    }
}

/// Parse `yyyy/MM/dd HHmm`
fn parse_date_with_time(input: &str) -> Option<NaiveDateTime> {
    if !matches_layout(input, DATE_TIME_LAYOUT) {
        return None;
    }
    NaiveDateTime::parse_from_str(input, "%Y/%m/%d %H%M").ok()
}

/// Parse `yyyy/MM/dd` at start of day
fn parse_date_only(input: &str) -> Option<NaiveDateTime> {
    if !matches_layout(input, DATE_LAYOUT) {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y/%m/%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Check exact digit counts before handing the token to chrono, which
/// would otherwise accept single-digit months and days.
fn matches_layout(input: &str, layout: &str) -> bool {
    input.len() == layout.len()
        && input.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'#' => c.is_ascii_digit(),
            _ => c == l,
        })
}

/// The last representable instant of a day, 23:59:59.999999999
fn end_of_day() -> NaiveTime {
    NaiveTime::MIN
        .overflowing_sub_signed(Duration::nanoseconds(1))
        .0
}

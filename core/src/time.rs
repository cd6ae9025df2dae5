use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::RecordError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest report range, in days, a caller may ask for.
pub const MAX_RANGE_DAYS: i64 = 366;

pub fn parse_date(input: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| RecordError::InvalidDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Every day from `start` to `end`, both included. Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Rejects ranges longer than [`MAX_RANGE_DAYS`]. An inverted range is empty,
/// not an error.
pub fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    let days = (end - start).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(anyhow!(
            "Range {} to {} spans {} days, at most {} allowed",
            format_date(start),
            format_date(end),
            days,
            MAX_RANGE_DAYS
        ));
    }
    Ok(())
}

/// Resolves a report date relative to `today`.
///
/// Accepts `today`, `yesterday`, a past offset (`-3d`, `-2w`), a weekday name
/// (the most recent such day, today included), `som` for the start of the
/// month, or a plain `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return days_before(today, Duration::days(1)),
        "som" => {
            return today
                .with_day(1)
                .ok_or_else(|| anyhow!("No first day for month of {}", today));
        }
        _ => {}
    }

    // 2. Past offset (-Nd, -Nw)
    if let Some(rest) = input.strip_prefix('-') {
        let (split, _) = rest
            .char_indices()
            .last()
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let (num_str, unit) = rest.split_at(split);
        let count: i64 = num_str.parse().map_err(|_| anyhow!("Invalid relative format: {}", input))?;
        let offset = match unit {
            "d" => Duration::try_days(count),
            "w" => Duration::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
        }
        .ok_or_else(|| anyhow!("Relative date out of range: {}", input))?;
        return days_before(today, offset);
    }

    // 3. Weekday (most recent)
    if let Ok(weekday) = parse_weekday_str(input) {
        let back = (7 + today.weekday().num_days_from_monday() as i64
            - weekday.num_days_from_monday() as i64)
            % 7;
        return days_before(today, Duration::days(back));
    }

    // 4. Fallback to the stored format
    parse_date(input).map_err(|e| anyhow!("Could not parse date: {}", e))
}

fn days_before(today: NaiveDate, offset: Duration) -> Result<NaiveDate> {
    today
        .checked_sub_signed(offset)
        .ok_or_else(|| anyhow!("Date out of range: {} before {}", offset, today))
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}

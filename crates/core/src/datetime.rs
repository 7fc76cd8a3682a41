//! Sale date-time format and clock policy
//!
//! Sale date-times travel and persist as text in the fixed
//! `YYYY-MM-DD HH:MM` form, which sorts lexicographically. Query windows
//! are computed here as half-open `[start, end)` bounds in the same form,
//! so store code never embeds clock arithmetic in SQL.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};

use crate::error::ConfigError;

/// `strftime` pattern for the canonical sale date-time form.
pub const SALES_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current wall-clock time in Japan Standard Time.
///
/// JST is UTC+9 with no daylight saving, so a fixed shift is exact and
/// no timezone database is involved.
pub fn now_tokyo() -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::hours(9)
}

/// Render a date-time in the canonical `YYYY-MM-DD HH:MM` form.
///
/// Seconds are dropped, not rounded.
pub fn format_sales_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(SALES_DATETIME_FORMAT).to_string()
}

/// Check that a value has the exact `YYYY-MM-DD HH:MM` shape.
///
/// ASCII digits only, no surrounding whitespace. Calendar validity is
/// deliberately not checked; the ingress contract pins the shape only.
pub fn is_sales_datetime(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 16 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Query window for upcoming ticket sales, relative to "now" in JST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleWindow {
    /// The rest of the current local day, midnight to midnight.
    SameDay,
    /// The coming hour, at minute precision.
    NextHour,
}

impl SaleWindow {
    /// Compute the half-open `[start, end)` bounds for this window,
    /// rendered in the canonical sale date-time form.
    pub fn bounds(self, now: NaiveDateTime) -> (String, String) {
        match self {
            Self::SameDay => {
                let start = now.date().and_time(NaiveTime::MIN);
                let end = start + Duration::days(1);
                (format_sales_datetime(start), format_sales_datetime(end))
            }
            Self::NextHour => {
                let end = now + Duration::hours(1);
                (format_sales_datetime(now), format_sales_datetime(end))
            }
        }
    }
}

impl FromStr for SaleWindow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same-day" => Ok(Self::SameDay),
            "next-hour" => Ok(Self::NextHour),
            other => Err(ConfigError::InvalidEnvVar(format!(
                "unknown sale window: {other}"
            ))),
        }
    }
}

impl fmt::Display for SaleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameDay => write!(f, "same-day"),
            Self::NextHour => write!(f, "next-hour"),
        }
    }
}

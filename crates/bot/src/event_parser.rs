//! Submission message parser
//!
//! Parses the three-line registration format into a new sale event:
//! event name, event URL, sale date-time. Lines beyond the third are
//! ignored; fields are trimmed, so a line of spaces counts as missing.

use thiserror::Error;
use ticketline_core::is_sales_datetime;

/// Errors that can occur while parsing a submission
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("submission is missing one of name, URL, or sale date-time")]
    MissingField,

    #[error("sale date-time is not in YYYY-MM-DD HH:MM form: {0}")]
    InvalidDateTime(String),
}

/// A successfully parsed submission ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub event_name: String,
    pub event_url: String,
    pub ticket_sales_date: String,
}

/// Parse a free-text message into a sale event submission.
///
/// Expected format:
/// ```text
/// イベント名
/// https://example.com/concert
/// 2024-04-01 22:00
/// ```
pub fn parse_submission(text: &str) -> Result<Submission, ParseError> {
    let mut lines = text.split('\n').map(str::trim);
    let event_name = lines.next().unwrap_or_default();
    let event_url = lines.next().unwrap_or_default();
    let ticket_sales_date = lines.next().unwrap_or_default();

    if event_name.is_empty() || event_url.is_empty() || ticket_sales_date.is_empty() {
        return Err(ParseError::MissingField);
    }

    if !is_sales_datetime(ticket_sales_date) {
        return Err(ParseError::InvalidDateTime(ticket_sales_date.to_string()));
    }

    Ok(Submission {
        event_name: event_name.to_string(),
        event_url: event_url.to_string(),
        ticket_sales_date: ticket_sales_date.to_string(),
    })
}

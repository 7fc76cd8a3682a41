//! Core domain models for Ticketline
//!
//! These models represent the core business entities and map to database tables.

use serde::{Deserialize, Serialize};

/// Separator line placed between events in a chat listing.
pub const LISTING_SEPARATOR: &str = "\n-------------------------------\n";

/// Ticket sale announcement entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(sqlx::FromRow)]
pub struct SaleEvent {
    pub event_name: String,
    pub event_url: String,
    pub ticket_sales_date: String, // canonical `YYYY-MM-DD HH:MM` text
}

impl SaleEvent {
    /// Render one event the way it appears in chat listings.
    pub fn listing_line(&self) -> String {
        format!(
            "{} {}\n{}",
            self.event_name, self.ticket_sales_date, self.event_url
        )
    }
}

/// Join events into a chat listing body.
///
/// Rows keep the order they were handed in; an empty slice yields an
/// empty string (callers substitute their own "nothing found" text).
pub fn format_listing(events: &[SaleEvent]) -> String {
    events
        .iter()
        .map(SaleEvent::listing_line)
        .collect::<Vec<_>>()
        .join(LISTING_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, date: &str) -> SaleEvent {
        SaleEvent {
            event_name: name.to_string(),
            event_url: format!("https://example.com/{name}"),
            ticket_sales_date: date.to_string(),
        }
    }

    #[test]
    fn test_separator_is_31_dashes_with_newlines() {
        assert_eq!(LISTING_SEPARATOR, "\n-------------------------------\n");
        assert_eq!(LISTING_SEPARATOR.matches('-').count(), 31);
    }

    #[test]
    fn test_listing_line_shape() {
        let event = sample("concert", "2024-04-01 22:00");
        assert_eq!(
            event.listing_line(),
            "concert 2024-04-01 22:00\nhttps://example.com/concert"
        );
    }

    #[test]
    fn test_format_listing_joins_with_separator() {
        let events = vec![
            sample("first", "2024-04-01 10:00"),
            sample("second", "2024-04-01 12:00"),
        ];
        let expected = format!(
            "first 2024-04-01 10:00\nhttps://example.com/first{LISTING_SEPARATOR}second 2024-04-01 12:00\nhttps://example.com/second"
        );
        assert_eq!(format_listing(&events), expected);
    }

    #[test]
    fn test_format_listing_single_row_has_no_separator() {
        let events = vec![sample("solo", "2024-04-01 10:00")];
        assert!(!format_listing(&events).contains("---"));
    }

    #[test]
    fn test_format_listing_empty() {
        assert_eq!(format_listing(&[]), "");
    }
}

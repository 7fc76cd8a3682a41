//! Intent classification for inbound text messages
//!
//! The dispatcher recognizes two fixed keywords anywhere in the message
//! text; everything else falls through to the configured fallback
//! behavior. Keyword checks are ordered, so a text containing both
//! keywords is treated as a sales query.

/// Keyword asking for the ticket sale listing.
pub const SALES_KEYWORD: &str = "チケ発";

/// Keyword asking how to register a new event.
pub const ADD_KEYWORD: &str = "追加";

/// What an inbound text message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// List upcoming ticket sales.
    SalesQuery,
    /// Show the registration format prompt.
    AddPrompt,
    /// No keyword matched; handled by the fallback behavior.
    Fallback,
}

/// Classify a message text by keyword containment.
pub fn classify(text: &str) -> Intent {
    if text.contains(SALES_KEYWORD) {
        Intent::SalesQuery
    } else if text.contains(ADD_KEYWORD) {
        Intent::AddPrompt
    } else {
        Intent::Fallback
    }
}

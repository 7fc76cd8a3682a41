//! Error types for the LINE wire layer

use thiserror::Error;

/// Errors surfaced by the outbound client.
///
/// Only transport-level failures are reported. Platform HTTP statuses are
/// not inspected; delivery is fire-and-forget.
#[derive(Error, Debug)]
pub enum LineError {
    #[error("LINE API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

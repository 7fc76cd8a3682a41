//! Ticketline Shared - process bootstrap helpers
//!
//! Environment loading, tracing initialization, and pool construction
//! used by every binary.

pub mod bootstrap;

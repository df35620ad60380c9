//! TestRail REST API client
//!
//! Thin wrapper over the TestRail HTTP API: one method per endpoint,
//! Basic authentication, JSON in and out. No retries and no timeout at
//! this layer; callers own both.

mod client;
mod error;

pub use client::TestRailClient;
pub use error::{ClientError, Result};

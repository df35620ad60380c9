//! TestRail Tools
//!
//! One tool per TestRail operation, grouped by resource. All tools are
//! registered at startup against one shared client.

pub mod cases;
pub mod projects;
pub mod runs;

use crate::tool_registry::ToolRegistry;
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use testrail_client::TestRailClient;
use tracing::info;

/// Register the full tool catalogue.
pub fn register_all(registry: &mut ToolRegistry, client: Arc<TestRailClient>) -> usize {
    let mut count = 0;
    count += runs::register_all(registry, client.clone());
    count += cases::register_all(registry, client.clone());
    count += projects::register_all(registry, client);
    info!(count, "Registered TestRail tools");
    count
}

pub(crate) fn require_id(input: &Value, field: &str) -> Result<u64> {
    input
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| anyhow::anyhow!("{} must be a positive integer", field))
}

pub(crate) fn optional_id(input: &Value, field: &str) -> Option<u64> {
    input.get(field).and_then(Value::as_u64)
}

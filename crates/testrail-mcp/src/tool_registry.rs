//! Tool Registry
//!
//! Fixed catalogue of named operations. Every tool is registered before
//! the transport starts serving and the registry is never mutated
//! afterwards, so lookups need no synchronization.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One named operation exposed to protocol callers
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    /// Human-readable title, documentation only
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON schema for the tool's arguments; the dispatcher validates
    /// calls against it before `execute` runs
    fn input_schema(&self) -> Value;
    async fn execute(&self, input: Value) -> Result<Value>;
}

pub type BoxedTool = Arc<dyn Tool>;

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, BoxedTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: BoxedTool) {
        debug!(tool = %tool.name(), "Registered tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&BoxedTool> {
        self.tools.get(name)
    }

    /// All registered tools, sorted by name for stable listing output
    pub fn list(&self) -> Vec<&BoxedTool> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by_key(|t| t.name());
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

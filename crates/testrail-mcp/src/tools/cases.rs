//! Test Case Tools

use super::{optional_id, require_id};
use crate::tool_registry::{Tool, ToolRegistry};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use testrail_client::TestRailClient;

pub fn register_all(registry: &mut ToolRegistry, client: Arc<TestRailClient>) -> usize {
    registry.register(Arc::new(GetTestCaseTool { client: client.clone() }));
    registry.register(Arc::new(ListCasesTool { client }));
    2
}

pub struct GetTestCaseTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetTestCaseTool {
    fn name(&self) -> &str {
        "get_test_case"
    }
    fn title(&self) -> &str {
        "Get Test Case"
    }
    fn description(&self) -> &str {
        "Retrieve details about a specific test case."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "case_id": {"type": "integer", "description": "The ID of the test case"}
            },
            "required": ["case_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let case_id = require_id(&input, "case_id")?;
        self.client.get_case(case_id).await.context("fetching test case")
    }
}

pub struct ListCasesTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for ListCasesTool {
    fn name(&self) -> &str {
        "list_cases"
    }
    fn title(&self) -> &str {
        "List Cases"
    }
    fn description(&self) -> &str {
        "List test cases for a project, optionally restricted to one suite."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "project_id": {"type": "integer", "description": "The ID of the project"},
                "suite_id": {"type": "integer", "description": "Restrict to this suite"}
            },
            "required": ["project_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let project_id = require_id(&input, "project_id")?;
        let suite_id = optional_id(&input, "suite_id");
        self.client
            .get_cases(project_id, suite_id)
            .await
            .context("fetching test cases")
    }
}

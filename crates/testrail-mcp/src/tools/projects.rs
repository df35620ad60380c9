//! Project, Plan, Suite and User Tools

use super::require_id;
use crate::tool_registry::{Tool, ToolRegistry};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use testrail_client::TestRailClient;

pub fn register_all(registry: &mut ToolRegistry, client: Arc<TestRailClient>) -> usize {
    registry.register(Arc::new(ListProjectsTool { client: client.clone() }));
    registry.register(Arc::new(GetUsersTool { client: client.clone() }));
    registry.register(Arc::new(ListPlansTool { client: client.clone() }));
    registry.register(Arc::new(GetPlanTool { client: client.clone() }));
    registry.register(Arc::new(ListSuitesTool { client }));
    5
}

pub struct ListProjectsTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for ListProjectsTool {
    fn name(&self) -> &str {
        "list_projects"
    }
    fn title(&self) -> &str {
        "List Projects"
    }
    fn description(&self) -> &str {
        "List all available TestRail projects."
    }
    fn input_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, _input: Value) -> Result<Value> {
        self.client.get_projects().await.context("fetching projects")
    }
}

pub struct GetUsersTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetUsersTool {
    fn name(&self) -> &str {
        "get_users"
    }
    fn title(&self) -> &str {
        "Get Users"
    }
    fn description(&self) -> &str {
        "Get the list of TestRail users."
    }
    fn input_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, _input: Value) -> Result<Value> {
        self.client.get_users().await.context("fetching users")
    }
}

pub struct ListPlansTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for ListPlansTool {
    fn name(&self) -> &str {
        "list_plans"
    }
    fn title(&self) -> &str {
        "List Plans"
    }
    fn description(&self) -> &str {
        "List test plans for a project."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "project_id": {"type": "integer", "description": "The ID of the project"}
            },
            "required": ["project_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let project_id = require_id(&input, "project_id")?;
        self.client.get_plans(project_id).await.context("fetching plans")
    }
}

pub struct GetPlanTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetPlanTool {
    fn name(&self) -> &str {
        "get_plan"
    }
    fn title(&self) -> &str {
        "Get Plan"
    }
    fn description(&self) -> &str {
        "Retrieve a specific test plan."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "plan_id": {"type": "integer", "description": "The ID of the test plan"}
            },
            "required": ["plan_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let plan_id = require_id(&input, "plan_id")?;
        self.client.get_plan(plan_id).await.context("fetching plan")
    }
}

pub struct ListSuitesTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for ListSuitesTool {
    fn name(&self) -> &str {
        "list_suites"
    }
    fn title(&self) -> &str {
        "List Suites"
    }
    fn description(&self) -> &str {
        "List test suites for a project."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "project_id": {"type": "integer", "description": "The ID of the project"}
            },
            "required": ["project_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let project_id = require_id(&input, "project_id")?;
        self.client.get_suites(project_id).await.context("fetching suites")
    }
}

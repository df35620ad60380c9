//! Test Run Tools

use super::require_id;
use crate::tool_registry::{Tool, ToolRegistry};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use testrail_client::TestRailClient;

pub fn register_all(registry: &mut ToolRegistry, client: Arc<TestRailClient>) -> usize {
    registry.register(Arc::new(GetTestRunTool { client: client.clone() }));
    registry.register(Arc::new(GetTestsForRunTool { client: client.clone() }));
    registry.register(Arc::new(GetTestResultsTool { client: client.clone() }));
    registry.register(Arc::new(GetResultsForTestTool { client }));
    4
}

pub struct GetTestRunTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetTestRunTool {
    fn name(&self) -> &str {
        "get_test_run"
    }
    fn title(&self) -> &str {
        "Get Test Run"
    }
    fn description(&self) -> &str {
        "Retrieve information about a specific TestRail test run."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "run_id": {"type": "integer", "description": "The ID of the test run"}
            },
            "required": ["run_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let run_id = require_id(&input, "run_id")?;
        self.client.get_run(run_id).await.context("fetching test run")
    }
}

pub struct GetTestsForRunTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetTestsForRunTool {
    fn name(&self) -> &str {
        "get_tests_for_run"
    }
    fn title(&self) -> &str {
        "Get Tests for Run"
    }
    fn description(&self) -> &str {
        "Get all tests in a specific test run."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "run_id": {"type": "integer", "description": "The ID of the test run"}
            },
            "required": ["run_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let run_id = require_id(&input, "run_id")?;
        self.client.get_tests(run_id).await.context("fetching tests")
    }
}

pub struct GetTestResultsTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetTestResultsTool {
    fn name(&self) -> &str {
        "get_test_results"
    }
    fn title(&self) -> &str {
        "Get Test Results"
    }
    fn description(&self) -> &str {
        "Fetch test results for a specific test run."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "run_id": {"type": "integer", "description": "The ID of the test run"}
            },
            "required": ["run_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let run_id = require_id(&input, "run_id")?;
        self.client
            .get_results_for_run(run_id)
            .await
            .context("fetching test results")
    }
}

pub struct GetResultsForTestTool {
    client: Arc<TestRailClient>,
}

#[async_trait]
impl Tool for GetResultsForTestTool {
    fn name(&self) -> &str {
        "get_results_for_test"
    }
    fn title(&self) -> &str {
        "Get Results for Test"
    }
    fn description(&self) -> &str {
        "Fetch results for a single test."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "test_id": {"type": "integer", "description": "The ID of the test"}
            },
            "required": ["test_id"]
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let test_id = require_id(&input, "test_id")?;
        self.client
            .get_results_for_test(test_id)
            .await
            .context("fetching results for test")
    }
}

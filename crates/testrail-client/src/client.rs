//! TestRail API Client
//!
//! ## API Endpoints
//!
//! | Endpoint | URL | Purpose |
//! |----------|-----|---------|
//! | Base path | `{instance}/index.php?/api/v2/` | All API v2 calls |
//!
//! ## Authentication
//! - Header: `Authorization: Basic base64(username:api_key)`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Fixed path prefix every API v2 endpoint hangs off
const API_PATH: &str = "/index.php?/api/v2/";

/// TestRail API Client
///
/// The base URL and computed auth token are immutable after
/// construction and shared across every call.
pub struct TestRailClient {
    client: Client,
    base_url: String,
    auth: String,
}

impl TestRailClient {
    /// Create a client for a TestRail instance. Trailing slashes on the
    /// base URL are stripped.
    pub fn new(base_url: impl Into<String>, username: &str, api_key: &str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            // No timeout here: the one timeout in this system belongs
            // to the CLI shim.
            client: Client::new(),
            base_url,
            auth: BASE64.encode(format!("{}:{}", username, api_key)),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PATH, endpoint)
    }

    /// Perform a GET against an API endpoint and parse the body as JSON.
    pub async fn request(&self, endpoint: &str) -> Result<Value> {
        self.request_with(endpoint, HeaderMap::new()).await
    }

    /// Same as [`request`](Self::request) with extra headers. Explicit
    /// headers override the defaults on a name collision.
    pub async fn request_with(&self, endpoint: &str, headers: HeaderMap) -> Result<Value> {
        let url = self.url_for(endpoint);
        debug!(url = %url, "TestRail request");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.auth))
            .header(CONTENT_TYPE, "application/json")
            .headers(headers)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get a specific test run
    pub async fn get_run(&self, run_id: u64) -> Result<Value> {
        self.request(&format!("get_run/{}", run_id)).await
    }

    /// Get results for a test run
    pub async fn get_results_for_run(&self, run_id: u64) -> Result<Value> {
        self.request(&format!("get_results_for_run/{}", run_id)).await
    }

    /// Get a specific test case
    pub async fn get_case(&self, case_id: u64) -> Result<Value> {
        self.request(&format!("get_case/{}", case_id)).await
    }

    /// Get all projects
    pub async fn get_projects(&self) -> Result<Value> {
        self.request("get_projects").await
    }

    /// Get all users
    pub async fn get_users(&self) -> Result<Value> {
        self.request("get_users").await
    }

    /// Get tests in a run
    pub async fn get_tests(&self, run_id: u64) -> Result<Value> {
        self.request(&format!("get_tests/{}", run_id)).await
    }

    /// Get results for a single test
    pub async fn get_results_for_test(&self, test_id: u64) -> Result<Value> {
        self.request(&format!("get_results/{}", test_id)).await
    }

    /// Get plans for a project
    pub async fn get_plans(&self, project_id: u64) -> Result<Value> {
        self.request(&format!("get_plans/{}", project_id)).await
    }

    /// Get a specific plan
    pub async fn get_plan(&self, plan_id: u64) -> Result<Value> {
        self.request(&format!("get_plan/{}", plan_id)).await
    }

    /// Get suites for a project
    pub async fn get_suites(&self, project_id: u64) -> Result<Value> {
        self.request(&format!("get_suites/{}", project_id)).await
    }

    /// Get cases for a project, optionally restricted to one suite
    pub async fn get_cases(&self, project_id: u64, suite_id: Option<u64>) -> Result<Value> {
        self.request(&Self::cases_endpoint(project_id, suite_id)).await
    }

    fn cases_endpoint(project_id: u64, suite_id: Option<u64>) -> String {
        match suite_id {
            Some(suite_id) => format!("get_cases/{}&suite_id={}", project_id, suite_id),
            None => format!("get_cases/{}", project_id),
        }
    }
}

//! MCP Server
//!
//! Transport-agnostic dispatcher. Tool calls are validated against the
//! tool's declared schema before the handler runs; handler outcomes are
//! wrapped in the uniform content/isError result shape, so a failing
//! upstream call never becomes a protocol-level fault.

use crate::protocol::{JsonRpcError, McpRequest, McpResponse};
use crate::tool_registry::ToolRegistry;
use crate::{PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct McpServerConfig {
    /// Server name override
    pub name: Option<String>,
}

pub struct McpServer {
    config: McpServerConfig,
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_config(McpServerConfig::default(), registry)
    }

    pub fn with_config(config: McpServerConfig, registry: ToolRegistry) -> Self {
        Self { config, registry }
    }

    /// Handle one MCP request
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        debug!(method = %request.method, "Handling MCP request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => McpResponse::success(request.id, json!({})),
            "ping" => McpResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => McpResponse::error(
                request.id,
                JsonRpcError::method_not_found(&request.method),
            ),
        }
    }

    fn handle_initialize(&self, request: McpRequest) -> McpResponse {
        let client_name = request
            .params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|ci| ci.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        info!(client = %client_name, "Client connected");

        let server_name = self.config.name.as_deref().unwrap_or(SERVER_NAME);

        McpResponse::success(
            request.id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": { "listChanged": false }
                },
                "serverInfo": {
                    "name": server_name,
                    "version": SERVER_VERSION
                }
            }),
        )
    }

    fn handle_tools_list(&self, request: McpRequest) -> McpResponse {
        let tools: Vec<Value> = self
            .registry
            .list()
            .iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "title": t.title(),
                    "description": t.description(),
                    "inputSchema": t.input_schema()
                })
            })
            .collect();

        McpResponse::success(request.id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: McpRequest) -> McpResponse {
        let params = match &request.params {
            Some(p) => p,
            None => {
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("Missing params"),
                )
            }
        };

        let tool_name = match params.get("name").and_then(|n| n.as_str()) {
            Some(n) => n,
            None => {
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("Missing tool name"),
                )
            }
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let tool = match self.registry.get(tool_name) {
            Some(t) => t,
            None => {
                warn!(tool = %tool_name, "Unknown tool");
                return McpResponse::success(
                    request.id,
                    json!({
                        "content": [{
                            "type": "text",
                            "text": format!("Tool not found: {}", tool_name)
                        }],
                        "isError": true
                    }),
                );
            }
        };

        // Schema-level validation happens before the handler runs, so a
        // bad argument never reaches the network.
        if let Err(reason) = validate_arguments(&tool.input_schema(), &arguments) {
            warn!(tool = %tool_name, %reason, "Rejected tool call");
            return McpResponse::error(request.id, JsonRpcError::invalid_params(reason));
        }

        match tool.execute(arguments).await {
            Ok(result) => McpResponse::success(
                request.id,
                json!({
                    "content": [{
                        "type": "text",
                        "text": serde_json::to_string_pretty(&result).unwrap_or_default()
                    }],
                    "isError": false
                }),
            ),
            Err(e) => McpResponse::success(
                request.id,
                json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error {:#}", e)
                    }],
                    "isError": true
                }),
            ),
        }
    }
}

/// Declarative argument validation against a tool's input schema:
/// required properties must be present, and typed properties must match
/// when supplied.
fn validate_arguments(schema: &Value, arguments: &Value) -> Result<(), String> {
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if arguments.get(field).is_none() {
                return Err(format!("Missing required argument: {}", field));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (field, property) in properties {
            let value = match arguments.get(field) {
                Some(v) => v,
                None => continue,
            };
            let expected = property.get("type").and_then(Value::as_str).unwrap_or("object");
            let ok = match expected {
                "integer" => value.as_u64().is_some(),
                "number" => value.is_number(),
                "string" => value.is_string(),
                "boolean" => value.is_boolean(),
                _ => true,
            };
            if !ok {
                return Err(format!("Argument {} must be of type {}", field, expected));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "run_id": {"type": "integer"}
            },
            "required": ["run_id"]
        })
    }

    #[test]
    fn validation_accepts_numeric_id() {
        assert!(validate_arguments(&id_schema(), &json!({"run_id": 42})).is_ok());
    }

    #[test]
    fn validation_rejects_missing_id() {
        let err = validate_arguments(&id_schema(), &json!({})).unwrap_err();
        assert!(err.contains("run_id"));
    }

    #[test]
    fn validation_rejects_non_numeric_id() {
        let err = validate_arguments(&id_schema(), &json!({"run_id": "abc"})).unwrap_err();
        assert!(err.contains("integer"));
    }

    #[test]
    fn validation_ignores_absent_optional_fields() {
        let schema = json!({
            "type": "object",
            "properties": {
                "project_id": {"type": "integer"},
                "suite_id": {"type": "integer"}
            },
            "required": ["project_id"]
        });
        assert!(validate_arguments(&schema, &json!({"project_id": 5})).is_ok());
        assert!(validate_arguments(&schema, &json!({"project_id": 5, "suite_id": 7})).is_ok());
        assert!(validate_arguments(&schema, &json!({"project_id": 5, "suite_id": "x"})).is_err());
    }
}

//! CLI command table
//!
//! Fixed lookup mapping each CLI command to the MCP tool call it
//! performs.

use serde_json::json;
use testrail_mcp::McpRequest;

/// Correlation id of the initialize handshake
pub const INIT_ID: u64 = 0;
/// Correlation id of the single operation request
pub const CALL_ID: u64 = 1;

pub struct CommandSpec {
    pub name: &'static str,
    pub tool: &'static str,
    /// Argument key for the numeric id, if the command takes one
    pub id_arg: Option<&'static str>,
    pub help: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "get-run",
        tool: "get_test_run",
        id_arg: Some("run_id"),
        help: "Get test run details",
    },
    CommandSpec {
        name: "get-tests",
        tool: "get_tests_for_run",
        id_arg: Some("run_id"),
        help: "Get tests for a run",
    },
    CommandSpec {
        name: "get-results",
        tool: "get_test_results",
        id_arg: Some("run_id"),
        help: "Get test results for a run",
    },
    CommandSpec {
        name: "get-case",
        tool: "get_test_case",
        id_arg: Some("case_id"),
        help: "Get test case details",
    },
    CommandSpec {
        name: "list-projects",
        tool: "list_projects",
        id_arg: None,
        help: "List all projects",
    },
    CommandSpec {
        name: "get-users",
        tool: "get_users",
        id_arg: None,
        help: "Get all users",
    },
];

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name == name)
}

impl CommandSpec {
    /// Build the tools/call request for this command.
    pub fn call_request(&self, id: Option<u64>) -> McpRequest {
        let arguments = match (self.id_arg, id) {
            (Some(key), Some(id)) => json!({ key: id }),
            _ => json!({}),
        };
        McpRequest::new("tools/call")
            .with_id(CALL_ID)
            .with_params(json!({ "name": self.tool, "arguments": arguments }))
    }
}

/// The initialize request written before the operation request.
pub fn initialize_request() -> McpRequest {
    McpRequest::new("initialize")
        .with_id(INIT_ID)
        .with_params(json!({
            "protocolVersion": testrail_mcp::PROTOCOL_VERSION,
            "capabilities": {},
            "clientInfo": {
                "name": "testrail-cli",
                "version": env!("CARGO_PKG_VERSION")
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_knows_all_six_commands() {
        for name in [
            "get-run",
            "get-tests",
            "get-results",
            "get-case",
            "list-projects",
            "get-users",
        ] {
            assert!(lookup(name).is_some(), "missing command {}", name);
        }
        assert!(lookup("foo").is_none());
        assert_eq!(COMMANDS.len(), 6);
    }

    #[test]
    fn only_the_list_commands_take_no_id() {
        for spec in COMMANDS {
            let takes_id = spec.id_arg.is_some();
            let expected = !matches!(spec.name, "list-projects" | "get-users");
            assert_eq!(takes_id, expected, "command {}", spec.name);
        }
    }

    #[test]
    fn call_request_carries_tool_and_id() {
        let spec = lookup("get-run").unwrap();
        let request = spec.call_request(Some(123));

        assert_eq!(request.method, "tools/call");
        assert_eq!(request.id, Some(json!(CALL_ID)));
        let params = request.params.unwrap();
        assert_eq!(params["name"], json!("get_test_run"));
        assert_eq!(params["arguments"], json!({"run_id": 123}));
    }

    #[test]
    fn call_request_without_id_sends_empty_arguments() {
        let spec = lookup("list-projects").unwrap();
        let request = spec.call_request(None);
        assert_eq!(request.params.unwrap()["arguments"], json!({}));
    }

    #[test]
    fn initialize_request_identifies_the_client() {
        let request = initialize_request();
        assert_eq!(request.method, "initialize");
        assert_eq!(request.id, Some(json!(INIT_ID)));
        let params = request.params.unwrap();
        assert_eq!(params["clientInfo"]["name"], json!("testrail-cli"));
        assert_eq!(params["protocolVersion"], json!(testrail_mcp::PROTOCOL_VERSION));
    }
}

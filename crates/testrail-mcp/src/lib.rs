//! testrail-mcp: MCP Protocol Server for TestRail
//!
//! Exposes the TestRail REST API as MCP tools over a stdio JSON-RPC
//! transport.
//!
//! Architecture:
//! stdin → MCP JSON-RPC → ToolRegistry → TestRailClient → stdout
//!
//! Methods:
//! - initialize → handshake
//! - tools/list → registered tool catalogue
//! - tools/call → validate arguments, call TestRail, wrap as text content

pub mod config;
pub mod protocol;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod transport;

pub use protocol::{JsonRpcError, McpRequest, McpResponse};
pub use server::{McpServer, McpServerConfig};
pub use tool_registry::{BoxedTool, Tool, ToolRegistry};

/// MCP protocol version this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Default server name reported on initialize
pub const SERVER_NAME: &str = "testrail-mcp-server";
/// Server version reported on initialize
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

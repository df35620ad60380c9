//! testrail-mcp-server: MCP server for the TestRail API
//!
//! Reads JSON-RPC requests on stdin and answers on stdout; all
//! diagnostics go to stderr so the protocol stream stays clean.
//!
//! Required environment:
//!   TESTRAIL_URL       base URL of the TestRail instance
//!   TESTRAIL_USERNAME  account email/username
//!   TESTRAIL_API_KEY   API key for that account

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use testrail_client::TestRailClient;
use testrail_mcp::config::Settings;
use testrail_mcp::transport::{StdioTransport, Transport};
use testrail_mcp::{tools, McpServer, ToolRegistry};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "testrail-mcp-server")]
#[command(about = "MCP server exposing the TestRail API")]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stderr, not stdout: stdout carries the protocol stream
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Fail fast on missing credentials, before any server resources
    // exist.
    let settings = Settings::from_env()?;
    let client = Arc::new(TestRailClient::new(
        settings.base_url,
        &settings.username,
        &settings.api_key,
    ));

    let mut registry = ToolRegistry::new();
    tools::register_all(&mut registry, client);

    let server = Arc::new(McpServer::new(registry));
    info!("TestRail MCP server running on stdio");

    StdioTransport::new().serve(server).await
}

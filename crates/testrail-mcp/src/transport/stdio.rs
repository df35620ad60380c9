//! Stdio Transport
//!
//! Line-oriented JSON-RPC over stdin/stdout. One request per line, one
//! response line per request. Diagnostics never go to stdout.

use super::{McpHandler, Transport};
use crate::{JsonRpcError, McpRequest, McpResponse};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

pub struct StdioTransport;

impl StdioTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for StdioTransport {
    async fn serve<H: McpHandler + 'static>(self, handler: Arc<H>) -> Result<()> {
        info!("Serving MCP over stdio");

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin).lines();

        while let Some(line) = reader.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!(request = %line, "Received request");

            let response = match serde_json::from_str::<McpRequest>(line) {
                Ok(request) => handler.handle_request(request).await,
                Err(e) => {
                    error!(error = %e, "Unparseable request line");
                    McpResponse::error(None, JsonRpcError::parse_error(e.to_string()))
                }
            };

            let response_json = serde_json::to_string(&response)?;
            stdout.write_all(response_json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}

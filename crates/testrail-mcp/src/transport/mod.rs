//! Transport Layer
//!
//! The dispatcher is transport-agnostic; stdio is the only transport
//! this server carries.

mod stdio;

pub use stdio::StdioTransport;

use anyhow::Result;
use std::sync::Arc;

/// Request handler seam between transports and the server
#[async_trait::async_trait]
pub trait McpHandler: Send + Sync {
    async fn handle_request(&self, request: crate::McpRequest) -> crate::McpResponse;
}

/// Transport trait - implement for new transport types
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Serve requests using this transport until the peer disconnects
    async fn serve<H: McpHandler + 'static>(self, handler: Arc<H>) -> Result<()>;
}

#[async_trait::async_trait]
impl McpHandler for crate::McpServer {
    async fn handle_request(&self, request: crate::McpRequest) -> crate::McpResponse {
        self.handle_request(request).await
    }
}

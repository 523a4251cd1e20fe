//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (registration with the ToolRouter)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error;
use crate::domains::epoch::EpochClient;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the epoch client through the tool router.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared HTTP client for the remote epoch server.
    epoch_client: Arc<EpochClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// The epoch client is built once here and shared by all tool routes,
    /// so the server reuses a single connection pool across calls.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = Arc::new(config);
        let epoch_client = Arc::new(EpochClient::new(&config.epoch)?);

        info!("Epoch server URL: {}", epoch_client.base_url());
        info!("Registered tools: {}", ToolRegistry::tool_names().join(", "));

        Ok(Self {
            tool_router: build_tool_router::<Self>(epoch_client.clone()),
            config,
            epoch_client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared epoch client.
    pub fn epoch_client(&self) -> &Arc<EpochClient> {
        &self.epoch_client
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server bridges MCP clients to the lending platform's epoch server. \
                 It provides tools to check the epoch server's health, start epochs, and \
                 distribute subsidies."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

//! Epoch Server MCP Adapter
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes the
//! lending platform's epoch operations as tools. Each tool forwards a single
//! HTTP request to the remote epoch server and reports the outcome as text,
//! so MCP clients never have to deal with raw HTTP.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **epoch**: HTTP client for the remote epoch server
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use epoch_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// This enum captures the error conditions that can occur during server
/// startup and operation. Failures of individual tool calls are not
/// represented here: those are reported to the MCP client as tool results
/// rather than propagated as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure to construct the HTTP client for the epoch server.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),
}

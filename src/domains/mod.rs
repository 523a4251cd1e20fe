//! Domains module containing business logic organized by bounded contexts.
//!
//! - **epoch**: the HTTP client for the remote epoch server
//! - **tools**: the MCP tools exposed to clients

pub mod epoch;
pub mod tools;

//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod distribute_subsidies;
pub mod health_check;
pub mod start_epoch;

pub use distribute_subsidies::{DistributeSubsidiesParams, DistributeSubsidiesTool};
pub use health_check::{HealthCheckParams, HealthCheckTool};
pub use start_epoch::{StartEpochParams, StartEpochTool};

//! Tool Registry - the fixed catalog of invocable operations.
//!
//! The catalog is declared once, never mutated, and performs no I/O. Both
//! the router and the capability advertisement are derived from it.

use rmcp::model::Tool;

use super::definitions::{DistributeSubsidiesTool, HealthCheckTool, StartEpochTool};

/// Tool registry - the single source of truth for available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in catalog order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            HealthCheckTool::NAME,
            StartEpochTool::NAME,
            DistributeSubsidiesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            HealthCheckTool::to_tool(),
            StartEpochTool::to_tool(),
            DistributeSubsidiesTool::to_tool(),
        ]
    }
}

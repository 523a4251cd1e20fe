//! Health check tool definition.
//!
//! Calls the epoch server's `/health` route and reports the result as
//! text, whatever layer the call succeeds or fails at.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::epoch::{EpochClient, HttpOutcome};

use super::common::{error_result, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the health check tool. There are none.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HealthCheckParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Health check tool - reports whether the epoch server is reachable and healthy.
pub struct HealthCheckTool;

impl HealthCheckTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "health_check";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check the health status of the epoch server";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(client: &EpochClient) -> CallToolResult {
        info!("Health check tool called");

        match client.health().await {
            HttpOutcome::Success(body) => {
                success_result(format!("Health check successful: {}", body))
            }
            HttpOutcome::HttpError { status, detail } => {
                error_result(&format!("Health check failed: HTTP {} - {}", status, detail))
            }
            HttpOutcome::TransportFailure(description) => {
                error_result(&format!("Health check failed: {}", description))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HealthCheckParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP router.
    pub fn create_route<S>(client: Arc<EpochClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            async move { Ok(Self::execute(&client).await) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

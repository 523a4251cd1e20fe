//! Distribute subsidies tool definition.
//!
//! Validates the epoch id, then asks the epoch server to distribute the
//! epoch's subsidies via `POST /epochs/{epoch_id}/distribute`.

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

/// Parameters for the distribute subsidies tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DistributeSubsidiesParams {
    /// Identifier of the epoch whose subsidies are distributed.
    #[schemars(description = "The ID of the epoch to distribute subsidies for")]
    pub epoch_id: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Distribute subsidies tool - triggers subsidy distribution for an epoch.
pub struct DistributeSubsidiesTool;

impl DistributeSubsidiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "distribute_subsidies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Distribute subsidies for an epoch";

    /// Execute the tool logic.
    ///
    /// A missing or empty epoch id short-circuits with a validation message
    /// before any network call is made.
    #[instrument(skip_all, fields(epoch_id = %params.epoch_id))]
    pub async fn execute(
        params: &DistributeSubsidiesParams,
        client: &EpochClient,
    ) -> CallToolResult {
        if params.epoch_id.is_empty() {
            return error_result("Error: epoch_id is required");
        }

        info!("Distributing subsidies for epoch {}", params.epoch_id);

        match client.distribute_subsidies(&params.epoch_id).await {
            HttpOutcome::Success(body) => success_result(format!(
                "Subsidies distributed for epoch {}: {}",
                params.epoch_id, body
            )),
            HttpOutcome::HttpError { status, detail } => error_result(&format!(
                "Failed to distribute subsidies for epoch {}: HTTP {} - {}",
                params.epoch_id, status, detail
            )),
            HttpOutcome::TransportFailure(description) => error_result(&format!(
                "Failed to distribute subsidies for epoch {}: {}",
                params.epoch_id, description
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DistributeSubsidiesParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                // Absent and empty ids share one validation path, so the id
                // is extracted leniently instead of failing deserialization.
                let params = DistributeSubsidiesParams {
                    epoch_id: args
                        .get("epoch_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                };
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EpochServerConfig;
    use crate::domains::tools::definitions::common::result_text;

    fn offline_client() -> EpochClient {
        // Never called in these tests; validation fails first.
        EpochClient::new(&EpochServerConfig {
            base_url: "http://127.0.0.1:9".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_tool_metadata() {
        let tool = DistributeSubsidiesTool::to_tool();
        assert_eq!(tool.name.as_ref(), "distribute_subsidies");
        assert_eq!(
            tool.description.as_deref(),
            Some("Distribute subsidies for an epoch")
        );
    }

    #[test]
    fn test_schema_requires_epoch_id() {
        let tool = DistributeSubsidiesTool::to_tool();
        let required = tool
            .input_schema
            .get("required")
            .and_then(|r| r.as_array())
            .expect("schema must list required params");
        assert!(required.iter().any(|v| v == "epoch_id"));
    }

    #[test]
    fn test_params_deserialize() {
        let params: DistributeSubsidiesParams =
            serde_json::from_str(r#"{"epoch_id": "7"}"#).unwrap();
        assert_eq!(params.epoch_id, "7");
    }

    #[test]
    fn test_empty_epoch_id_short_circuits() {
        let params = DistributeSubsidiesParams {
            epoch_id: String::new(),
        };
        let result =
            tokio_test::block_on(DistributeSubsidiesTool::execute(&params, &offline_client()));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Error: epoch_id is required");
    }
}

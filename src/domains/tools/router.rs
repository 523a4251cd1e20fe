//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them, handing every route a handle to the shared epoch client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::epoch::EpochClient;

use super::definitions::{DistributeSubsidiesTool, HealthCheckTool, StartEpochTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<EpochClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(HealthCheckTool::create_route(client.clone()))
        .with_route(StartEpochTool::create_route(client.clone()))
        .with_route(DistributeSubsidiesTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::EpochServerConfig;

    struct TestServer {}

    fn test_client() -> Arc<EpochClient> {
        Arc::new(
            EpochClient::new(&EpochServerConfig {
                base_url: "http://localhost:8080".to_string(),
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"health_check"));
        assert!(names.contains(&"start_epoch"));
        assert!(names.contains(&"distribute_subsidies"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router advertise the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}

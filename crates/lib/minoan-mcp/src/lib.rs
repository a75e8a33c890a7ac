//! MCP server implementation for the Minoan catalog.
//!
//! This crate wires the catalog control plane into rmcp tool handlers and the
//! read-only catalog resource, and provides stdio and streamable HTTP runners.

mod helpers;
mod resources;
mod tools;
pub mod server;

pub use tools::catalog::{GetProductDetailsParams, SearchProductsParams};
pub use tools::orders::CreateOrderParams;

use minoan_core::control::MinoanControlPlane;
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::ToolRouter,
    service::RequestContext,
    tool_handler,
};
use rmcp::model::{
    ListResourcesResult,
    PaginatedRequestParams,
    ReadResourceRequestParams,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
};

const SERVER_INSTRUCTIONS: &str = r#"Minoan lets you discover and purchase furniture and décor through natural conversation.

Tools:
- `get_products` lists the catalog ordered by name.
- `search_products` filters in-stock products by `query` (name or description, case-insensitive),
  exact `category`, and inclusive `min_price` / `max_price`. Every filter is optional.
- `get_product_details` returns every attribute of one product by `product_id`.
- `list_categories` returns the distinct category names; use them for `category` filters.
- `create_order` places a pending order for an in-stock product (`quantity` defaults to 1).

Every tool returns `{status: "success" | "error", ...}`; on error read `message`.

Resource:
- `minoan:///catalog` is a JSON snapshot of in-stock products ordered by category and name."#;

/// MCP server wrapper around the catalog control plane and tool routers.
#[derive(Clone)]
pub struct MinoanMcp {
    tool_router: ToolRouter<Self>,
    control: MinoanControlPlane,
}

impl MinoanMcp {
    #[must_use]
    pub fn new(control: MinoanControlPlane) -> Self {
        let tool_router = Self::tool_router_catalog() + Self::tool_router_orders();
        Self {
            tool_router,
            control,
        }
    }
}

#[tool_handler]
impl ServerHandler for MinoanMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::catalog_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_catalog(&request.uri).await
    }
}

use minoan_store::models::ProductFilter;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{MinoanMcp, helpers};

/// Parameters for searching the catalog. Empty or missing fields do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchProductsParams {
    /// Case-insensitive text matched against product name or description.
    #[serde(default)]
    pub query: String,
    /// Exact category name.
    #[serde(default)]
    pub category: String,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl From<SearchProductsParams> for ProductFilter {
    fn from(params: SearchProductsParams) -> Self {
        Self::new(
            Some(params.query),
            Some(params.category),
            params.min_price,
            params.max_price,
        )
    }
}

/// Parameters for fetching a single product.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetProductDetailsParams {
    pub product_id: i64,
}

#[tool_router(router = tool_router_catalog, vis = "pub")]
impl MinoanMcp {
    #[tool(description = "Fetch all furniture and décor products from the Minoan catalog, ordered by name.")]
    pub async fn get_products(&self) -> Result<CallToolResult, ErrorData> {
        helpers::envelope_result(self.control.list_products().await)
    }

    #[tool(
        description = "Search in-stock products by text (name or description), exact category, and inclusive price range. All filters are optional."
    )]
    pub async fn search_products(
        &self,
        Parameters(params): Parameters<SearchProductsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let envelope = self.control.search_products(params.into()).await;
        helpers::envelope_result(envelope)
    }

    #[tool(description = "Fetch every attribute of a product by its id.")]
    pub async fn get_product_details(
        &self,
        Parameters(params): Parameters<GetProductDetailsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::envelope_result(self.control.get_product_details(params.product_id).await)
    }

    #[tool(description = "List the distinct product categories in ascending order.")]
    pub async fn list_categories(&self) -> Result<CallToolResult, ErrorData> {
        helpers::envelope_result(self.control.list_categories().await)
    }
}

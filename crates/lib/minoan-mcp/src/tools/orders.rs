use minoan_store::models::NewOrder;
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

const fn default_quantity() -> i64 {
    1
}

/// Parameters for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CreateOrderParams {
    pub product_id: i64,
    /// Number of units; defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
}

impl From<CreateOrderParams> for NewOrder {
    fn from(params: CreateOrderParams) -> Self {
        Self::new(
            params.product_id,
            params.quantity,
            Some(params.customer_name),
            Some(params.customer_email),
        )
    }
}

#[tool_router(router = tool_router_orders, vis = "pub")]
impl MinoanMcp {
    #[tool(
        description = "Place a pending order for an in-stock product. Returns the order id, total price, and order details."
    )]
    pub async fn create_order(
        &self,
        Parameters(params): Parameters<CreateOrderParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::envelope_result(self.control.create_order(params.into()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_use_defaults() {
        let params: CreateOrderParams =
            serde_json::from_value(serde_json::json!({"product_id": 2})).expect("params parse");
        assert_eq!(params.quantity, 1);

        let order = NewOrder::from(params);
        assert_eq!(order.product_id, 2);
        assert!(order.customer_name.is_none());
        assert!(order.customer_email.is_none());
    }
}

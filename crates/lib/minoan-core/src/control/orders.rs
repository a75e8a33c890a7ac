use minoan_store::models::{NewOrder, OrderDetails};

use super::{ControlError, Envelope, MinoanControlPlane, OrderConfirmation};

impl MinoanControlPlane {
    /// Places a pending order for an in-stock product.
    ///
    /// Stock is not decremented and the order cannot be read back afterwards.
    pub async fn create_order(&self, order: NewOrder) -> Envelope<OrderConfirmation> {
        Envelope::capture(self.place_order(order).await, "creating order")
    }

    async fn place_order(&self, order: NewOrder) -> Result<OrderConfirmation, ControlError> {
        let product = self
            .store
            .get_product(order.product_id)
            .await?
            .ok_or(ControlError::NotFound {
                product_id: order.product_id,
            })?;

        if !product.in_stock {
            return Err(ControlError::OutOfStock { name: product.name });
        }

        let stored = self.store.insert_order(order).await?;
        let details = OrderDetails::from_order(&stored, &product);
        tracing::info!(
            order_id = stored.id,
            product_id = product.id,
            quantity = stored.quantity,
            total_price = details.total_price,
            "order created"
        );

        Ok(OrderConfirmation {
            order_id: stored.id,
            message: format!(
                "Order #{} placed for {} x {}",
                stored.id, stored.quantity, product.name
            ),
            total_price: details.total_price,
            order_details: details,
        })
    }
}

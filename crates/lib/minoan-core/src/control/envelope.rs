//! Uniform `{status, ...}` response wrapper for tool operations.

use minoan_store::models::{OrderDetails, Product};
use serde::{Deserialize, Serialize};

use super::ControlError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success(T),
    Error { message: String },
}

impl<T> Envelope<T> {
    /// Wraps an operation result. Storage failures are prefixed with the
    /// action that was running; domain errors keep their own message.
    pub fn capture(result: Result<T, ControlError>, action: &str) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err @ (ControlError::NotFound { .. } | ControlError::OutOfStock { .. })) => {
                tracing::info!(action, error = %err, "operation rejected");
                Self::Error {
                    message: err.to_string(),
                }
            }
            Err(ControlError::Store(err)) => {
                tracing::warn!(action, error = %err, "operation failed");
                Self::Error {
                    message: format!("Error {action}: {err}"),
                }
            }
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message } => Some(message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductList<T> {
    pub count: usize,
    pub products: Vec<T>,
}

impl<T> From<Vec<T>> for ProductList<T> {
    fn from(products: Vec<T>) -> Self {
        Self {
            count: products.len(),
            products,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: i64,
    pub message: String,
    pub total_price: f64,
    pub order_details: OrderDetails,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::StoreError;

    #[test]
    fn success_flattens_payload_beside_status() {
        let envelope = Envelope::Success(CategoryList {
            categories: vec!["Decor".to_string(), "Lighting".to_string()],
        });
        let value = serde_json::to_value(&envelope).expect("envelope serializes");
        assert_eq!(
            value,
            json!({"status": "success", "categories": ["Decor", "Lighting"]})
        );
    }

    #[test]
    fn not_found_keeps_its_own_message() {
        let envelope: Envelope<ProductDetail> =
            Envelope::capture(Err(ControlError::NotFound { product_id: 42 }), "fetching product details");
        let value = serde_json::to_value(&envelope).expect("envelope serializes");
        assert_eq!(
            value,
            json!({"status": "error", "message": "Product with ID 42 not found"})
        );
    }

    #[test]
    fn store_failures_name_the_action() {
        let envelope: Envelope<CategoryList> = Envelope::capture(
            Err(ControlError::Store(StoreError::Task("worker panicked".to_string()))),
            "fetching categories",
        );
        assert_eq!(
            envelope.error_message(),
            Some("Error fetching categories: storage task failed: worker panicked")
        );
    }
}

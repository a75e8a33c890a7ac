use serde::{Deserialize, Serialize};

/// A catalog product with every stored attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub material: Option<String>,
    pub color: Option<String>,
    pub dimensions: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

/// The name-only projection of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
}

/// A product as it appears in listings, shaped by the configured catalog view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CatalogEntry {
    Full(Product),
    Summary(ProductSummary),
}

impl CatalogEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Full(product) => &product.name,
            Self::Summary(summary) => &summary.name,
        }
    }
}

/// Product row to insert; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

/// Optional constraints for a product search. `None` means unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Builds a filter, treating empty or whitespace-only text as absent.
    #[must_use]
    pub fn new(
        query: Option<String>,
        category: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Self {
        Self {
            query: non_blank(query),
            category: non_blank(category),
            min_price,
            max_price,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

/// Order request as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub product_id: i64,
    pub quantity: i64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

impl NewOrder {
    #[must_use]
    pub fn new(
        product_id: i64,
        quantity: i64,
        customer_name: Option<String>,
        customer_email: Option<String>,
    ) -> Self {
        Self {
            product_id,
            quantity,
            customer_name: non_blank(customer_name),
            customer_email: non_blank(customer_email),
        }
    }
}

/// A persisted order row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub order_date: String,
    pub status: String,
}

/// Order confirmation detail returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    pub order_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub order_date: String,
    pub status: String,
}

impl OrderDetails {
    #[must_use]
    pub fn from_order(order: &Order, product: &Product) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let total_price = product.price * order.quantity as f64;
        Self {
            order_id: order.id,
            product_name: product.name.clone(),
            quantity: order.quantity,
            unit_price: product.price,
            total_price,
            order_date: order.order_date.clone(),
            status: order.status.clone(),
        }
    }
}

/// Read-only catalog snapshot served as the catalog resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    pub store: String,
    pub description: String,
    pub total_products: usize,
    pub products: Vec<CatalogEntry>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

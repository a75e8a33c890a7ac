pub const TABLE_PRODUCTS: &str = "products";
pub const TABLE_ORDERS: &str = "orders";

pub const ORDER_STATUS_PENDING: &str = "pending";

pub const STORE_NAME: &str = "Minoan";
pub const STORE_DESCRIPTION: &str =
    "Discover and purchase furniture and décor through natural conversation";

pub const CATALOG_URI: &str = "minoan:///catalog";
pub const CATALOG_MIME_TYPE: &str = "application/json";

/// Column list for full product reads, in the order `product_from_row` expects by name.
pub const PRODUCT_COLUMNS: &str = "id, name, description, category, price, material, color, dimensions, image_url, in_stock";

pub const CREATE_PRODUCTS: &str = r"
CREATE TABLE IF NOT EXISTS products(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) > 0),
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    price REAL NOT NULL CHECK (price >= 0),
    material TEXT,
    color TEXT,
    dimensions TEXT,
    image_url TEXT,
    in_stock INTEGER NOT NULL DEFAULT 1
)";

pub const CREATE_ORDERS: &str = r"
CREATE TABLE IF NOT EXISTS orders(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL REFERENCES products(id),
    quantity INTEGER NOT NULL DEFAULT 1 CHECK (quantity > 0),
    customer_name TEXT,
    customer_email TEXT,
    order_date TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending'
)";

/// Selects which product projection listing endpoints return.
///
/// The stored table always carries the full schema; `Minimal` narrows the
/// listing and catalog output to `{id, name}` across every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogView {
    Minimal,
    #[default]
    Full,
}

impl CatalogView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

use std::{
    error::Error,
    fmt,
    path::PathBuf,
    sync::Arc,
};

use chrono::{SecondsFormat, Utc};
use minoan_store::models::{NewOrder, NewProduct, Order, Product, ProductFilter, ProductSummary};
use minoan_store::schema::{
    CREATE_ORDERS,
    CREATE_PRODUCTS,
    ORDER_STATUS_PENDING,
    PRODUCT_COLUMNS,
    TABLE_ORDERS,
    TABLE_PRODUCTS,
};
use minoan_store::seed::sample_products;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use serde::Serialize;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(Box<rusqlite::Error>),
    InvalidInput(String),
    Task(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "SQLite error: {err}"),
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
            Self::Task(message) => write!(f, "storage task failed: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sqlite(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of schema creation and seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub journal_mode: String,
    pub inserted: usize,
    pub product_count: i64,
}

/// File-backed catalog store. Each call opens its own short-lived connection.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    path: Arc<PathBuf>,
}

impl SqliteCatalogStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    async fn with_connection<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> StoreResult<T> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let mut conn = Connection::open(path.as_path())?;
            op(&mut conn)
        })
        .await
        .map_err(|err| StoreError::Task(err.to_string()))?
    }

    /// Creates both tables if needed and seeds the sample catalog into an empty
    /// `products` table.
    ///
    /// # Errors
    /// Returns `StoreError` if the database cannot be opened or written.
    pub async fn bootstrap(&self) -> StoreResult<BootstrapReport> {
        let report = self
            .with_connection(|conn| {
                let journal_mode: String =
                    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
                conn.execute_batch(&format!("{CREATE_PRODUCTS};\n{CREATE_ORDERS};"))?;

                let existing = count_rows(conn, TABLE_PRODUCTS)?;
                if existing > 0 {
                    return Ok(BootstrapReport {
                        journal_mode,
                        inserted: 0,
                        product_count: existing,
                    });
                }

                let seeds = sample_products();
                let tx = conn.transaction()?;
                for product in &seeds {
                    insert_product_row(&tx, product)?;
                }
                tx.commit()?;

                Ok(BootstrapReport {
                    journal_mode,
                    inserted: seeds.len(),
                    product_count: count_rows(conn, TABLE_PRODUCTS)?,
                })
            })
            .await?;

        if report.inserted > 0 {
            tracing::info!(
                path = %self.path.display(),
                inserted = report.inserted,
                "database initialized with sample products"
            );
        } else {
            tracing::info!(
                path = %self.path.display(),
                product_count = report.product_count,
                "database already contains products"
            );
        }
        Ok(report)
    }

    /// Lists complete product records ordered by name.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn list_products(&self, in_stock_only: bool) -> StoreResult<Vec<Product>> {
        let mut sql = format!("SELECT {PRODUCT_COLUMNS} FROM products");
        if in_stock_only {
            sql.push_str(" WHERE in_stock = 1");
        }
        sql.push_str(" ORDER BY name ASC");
        tracing::debug!(%sql, "listing products");
        self.with_connection(move |conn| query_products(conn, &sql, Vec::new()))
            .await
    }

    /// Lists `{id, name}` for every product ordered by name.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn list_product_summaries(&self) -> StoreResult<Vec<ProductSummary>> {
        tracing::debug!("listing product summaries");
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, name FROM products ORDER BY name ASC")?;
            let summaries = stmt
                .query_map([], summary_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(summaries)
        })
        .await
    }

    /// Searches in-stock products with the optional filter constraints.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn search_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let (sql, values) = build_search_query(filter);
        tracing::debug!(%sql, params = values.len(), "searching products");
        self.with_connection(move |conn| query_products(conn, &sql, values))
            .await
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn get_product(&self, product_id: i64) -> StoreResult<Option<Product>> {
        tracing::debug!(product_id, "fetching product");
        self.with_connection(move |conn| {
            let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
            let product = conn
                .query_row(&sql, [product_id], product_from_row)
                .optional()?;
            Ok(product)
        })
        .await
    }

    /// Lists distinct categories in ascending order.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn list_categories(&self) -> StoreResult<Vec<String>> {
        tracing::debug!("listing categories");
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT DISTINCT category FROM products ORDER BY category ASC")?;
            let categories = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(categories)
        })
        .await
    }

    /// Lists in-stock products ordered by category, then name.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn list_catalog(&self) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE in_stock = 1 ORDER BY category ASC, name ASC"
        );
        tracing::debug!("listing catalog");
        self.with_connection(move |conn| query_products(conn, &sql, Vec::new()))
            .await
    }

    /// Inserts a pending order stamped with the current time.
    ///
    /// # Errors
    /// Returns `StoreError` if the quantity is not positive or the insert fails.
    pub async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        if order.quantity < 1 {
            return Err(StoreError::InvalidInput(format!(
                "quantity must be at least 1, got {}",
                order.quantity
            )));
        }
        let order_date = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.with_connection(move |conn| {
            conn.execute(
                "INSERT INTO orders(product_id, quantity, customer_name, customer_email, order_date, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    order.product_id,
                    order.quantity,
                    order.customer_name,
                    order.customer_email,
                    order_date,
                    ORDER_STATUS_PENDING,
                ],
            )?;
            Ok(Order {
                id: conn.last_insert_rowid(),
                product_id: order.product_id,
                quantity: order.quantity,
                customer_name: order.customer_name,
                customer_email: order.customer_email,
                order_date,
                status: ORDER_STATUS_PENDING.to_string(),
            })
        })
        .await
    }

    /// Counts stored products.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn product_count(&self) -> StoreResult<i64> {
        self.with_connection(|conn| count_rows(conn, TABLE_PRODUCTS))
            .await
    }

    /// Counts stored orders.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn order_count(&self) -> StoreResult<i64> {
        self.with_connection(|conn| count_rows(conn, TABLE_ORDERS))
            .await
    }
}

fn count_rows(conn: &Connection, table: &str) -> StoreResult<i64> {
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(count)
}

fn insert_product_row(conn: &Connection, product: &NewProduct) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO products(name, description, category, price, material, color, dimensions, image_url, in_stock)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            product.name,
            product.description,
            product.category,
            product.price,
            product.material,
            product.color,
            product.dimensions,
            product.image_url,
            product.in_stock,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn query_products(conn: &Connection, sql: &str, values: Vec<Value>) -> StoreResult<Vec<Product>> {
    let mut stmt = conn.prepare(sql)?;
    let products = stmt
        .query_map(params_from_iter(values), product_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(products)
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        category: row.get("category")?,
        price: row.get("price")?,
        material: row.get("material")?,
        color: row.get("color")?,
        dimensions: row.get("dimensions")?,
        image_url: row.get("image_url")?,
        in_stock: row.get("in_stock")?,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<ProductSummary> {
    Ok(ProductSummary {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

fn build_search_query(filter: &ProductFilter) -> (String, Vec<Value>) {
    let mut sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE in_stock = 1");
    let mut values = Vec::new();

    if let Some(query) = filter.query.as_deref() {
        let pattern = format!("%{}%", escape_like(query));
        sql.push_str(" AND (name LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')");
        values.push(Value::Text(pattern.clone()));
        values.push(Value::Text(pattern));
    }
    if let Some(category) = filter.category.as_deref() {
        sql.push_str(" AND category = ?");
        values.push(Value::Text(category.to_string()));
    }
    if let Some(min_price) = filter.min_price {
        sql.push_str(" AND price >= ?");
        values.push(Value::Real(min_price));
    }
    if let Some(max_price) = filter.max_price {
        sql.push_str(" AND price <= ?");
        values.push(Value::Real(max_price));
    }

    sql.push_str(" ORDER BY name ASC");
    (sql, values)
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_only_constrains_stock() {
        let (sql, values) = build_search_query(&ProductFilter::default());
        assert!(sql.ends_with("WHERE in_stock = 1 ORDER BY name ASC"));
        assert!(values.is_empty());
    }

    #[test]
    fn filters_combine_in_order() {
        let filter = ProductFilter::new(
            Some("lamp".to_string()),
            Some("Lighting".to_string()),
            Some(100.0),
            Some(300.0),
        );
        let (sql, values) = build_search_query(&filter);

        assert!(sql.contains("name LIKE ? ESCAPE '\\' OR description LIKE ?"));
        assert!(sql.contains("AND category = ?"));
        assert!(sql.contains("AND price >= ?"));
        assert!(sql.contains("AND price <= ?"));
        assert_eq!(
            values,
            vec![
                Value::Text("%lamp%".to_string()),
                Value::Text("%lamp%".to_string()),
                Value::Text("Lighting".to_string()),
                Value::Real(100.0),
                Value::Real(300.0),
            ]
        );
    }

    #[test]
    fn blank_text_filters_are_ignored() {
        let filter = ProductFilter::new(Some("  ".to_string()), Some(String::new()), None, None);
        assert!(filter.is_empty());
        let (_, values) = build_search_query(&filter);
        assert!(values.is_empty());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}

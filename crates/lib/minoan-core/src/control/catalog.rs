use minoan_store::models::{CatalogDocument, CatalogEntry, Product, ProductFilter};
use minoan_store::schema::{CatalogView, STORE_DESCRIPTION, STORE_NAME};
use serde_json::json;

use super::{
    CategoryList,
    ControlError,
    Envelope,
    MinoanControlPlane,
    ProductDetail,
    ProductList,
};

impl MinoanControlPlane {
    /// Lists products using the configured view: every product as `{id, name}`
    /// for the minimal view, in-stock full records otherwise. Ordered by name.
    pub async fn list_products(&self) -> Envelope<ProductList<CatalogEntry>> {
        Envelope::capture(self.listed_products().await, "fetching products")
    }

    /// Searches in-stock products. Absent filters do not constrain the result.
    pub async fn search_products(
        &self,
        filter: ProductFilter,
    ) -> Envelope<ProductList<Product>> {
        let result = self
            .store
            .search_products(&filter)
            .await
            .map(ProductList::from)
            .map_err(ControlError::from);
        Envelope::capture(result, "searching products")
    }

    /// Fetches every column of a single product.
    pub async fn get_product_details(&self, product_id: i64) -> Envelope<ProductDetail> {
        let result = match self.store.get_product(product_id).await {
            Ok(Some(product)) => Ok(ProductDetail { product }),
            Ok(None) => Err(ControlError::NotFound { product_id }),
            Err(err) => Err(err.into()),
        };
        Envelope::capture(result, "fetching product details")
    }

    /// Lists distinct product categories in ascending order.
    pub async fn list_categories(&self) -> Envelope<CategoryList> {
        let result = self
            .store
            .list_categories()
            .await
            .map(|categories| CategoryList { categories })
            .map_err(ControlError::from);
        Envelope::capture(result, "fetching categories")
    }

    /// Builds the catalog snapshot served by the catalog resource.
    ///
    /// # Errors
    /// Returns `ControlError` if the store query fails.
    pub async fn catalog_document(&self) -> Result<CatalogDocument, ControlError> {
        let products: Vec<CatalogEntry> = match self.view {
            CatalogView::Minimal => self
                .store
                .list_product_summaries()
                .await?
                .into_iter()
                .map(CatalogEntry::Summary)
                .collect(),
            CatalogView::Full => self
                .store
                .list_catalog()
                .await?
                .into_iter()
                .map(CatalogEntry::Full)
                .collect(),
        };
        Ok(CatalogDocument {
            store: STORE_NAME.to_string(),
            description: STORE_DESCRIPTION.to_string(),
            total_products: products.len(),
            products,
        })
    }

    /// Renders the catalog snapshot as pretty JSON. Failures are embedded as
    /// an `error` field in the document body.
    pub async fn catalog_json(&self) -> String {
        let rendered = self
            .catalog_document()
            .await
            .map_err(|err| err.to_string())
            .and_then(|document| {
                serde_json::to_string_pretty(&document).map_err(|err| err.to_string())
            });
        match rendered {
            Ok(body) => body,
            Err(message) => {
                tracing::warn!(error = %message, "catalog resource failed");
                let body = json!({ "error": format!("Could not load catalog: {message}") });
                serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
            }
        }
    }

    async fn listed_products(&self) -> Result<ProductList<CatalogEntry>, ControlError> {
        let entries: Vec<CatalogEntry> = match self.view {
            CatalogView::Minimal => self
                .store
                .list_product_summaries()
                .await?
                .into_iter()
                .map(CatalogEntry::Summary)
                .collect(),
            CatalogView::Full => self
                .store
                .list_products(true)
                .await?
                .into_iter()
                .map(CatalogEntry::Full)
                .collect(),
        };
        Ok(ProductList::from(entries))
    }
}

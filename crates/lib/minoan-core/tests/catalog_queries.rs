mod common;

use common::{TestDb, seeded_control};
use minoan_core::control::MinoanControlPlane;
use minoan_store::models::{CatalogEntry, ProductFilter};
use minoan_store::schema::{CatalogView, STORE_NAME};

fn names<'a>(products: impl IntoIterator<Item = &'a minoan_store::Product>) -> Vec<String> {
    products.into_iter().map(|product| product.name.clone()).collect()
}

#[tokio::test]
async fn unfiltered_search_matches_in_stock_listing() {
    let (_db, control) = seeded_control("search-all", CatalogView::Full).await;

    let listed = control.list_products().await.success().expect("listing succeeds");
    let searched = control
        .search_products(ProductFilter::default())
        .await
        .success()
        .expect("search succeeds");

    let listed_names: Vec<String> = listed
        .products
        .iter()
        .map(|entry| entry.name().to_string())
        .collect();
    assert_eq!(listed_names, names(&searched.products));
    assert_eq!(searched.count, 9);
    assert!(searched.products.iter().all(|product| product.in_stock));

    let mut sorted = listed_names.clone();
    sorted.sort();
    assert_eq!(listed_names, sorted);
}

#[tokio::test]
async fn category_filter_requires_exact_match() {
    let (_db, control) = seeded_control("search-category", CatalogView::Full).await;

    let lighting = control
        .search_products(ProductFilter::new(None, Some("Lighting".to_string()), None, None))
        .await
        .success()
        .expect("search succeeds");
    assert_eq!(
        names(&lighting.products),
        vec!["Industrial Floor Lamp", "Rattan Pendant Light"]
    );

    let partial = control
        .search_products(ProductFilter::new(None, Some("Light".to_string()), None, None))
        .await
        .success()
        .expect("search succeeds");
    assert_eq!(partial.count, 0);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let (_db, control) = seeded_control("search-price", CatalogView::Full).await;

    let result = control
        .search_products(ProductFilter::new(None, None, Some(500.0), Some(900.0)))
        .await
        .success()
        .expect("search succeeds");

    assert_eq!(
        names(&result.products),
        vec!["Bohemian Area Rug", "Mid-Century Armchair", "Scandinavian Dining Table"]
    );
    assert!(
        result
            .products
            .iter()
            .all(|product| (500.0..=900.0).contains(&product.price))
    );
}

#[tokio::test]
async fn text_query_is_case_insensitive_over_name_and_description() {
    let (_db, control) = seeded_control("search-text", CatalogView::Full).await;

    let by_name = control
        .search_products(ProductFilter::new(Some("LAMP".to_string()), None, None, None))
        .await
        .success()
        .expect("search succeeds");
    assert_eq!(names(&by_name.products), vec!["Industrial Floor Lamp"]);

    let by_description = control
        .search_products(ProductFilter::new(Some("solid oak".to_string()), None, None, None))
        .await
        .success()
        .expect("search succeeds");
    assert_eq!(names(&by_description.products), vec!["Scandinavian Dining Table"]);

    let wildcard = control
        .search_products(ProductFilter::new(Some("%".to_string()), None, None, None))
        .await
        .success()
        .expect("search succeeds");
    assert_eq!(wildcard.count, 0);
}

#[tokio::test]
async fn product_details_return_every_column() {
    let (_db, control) = seeded_control("details", CatalogView::Full).await;

    let detail = control
        .get_product_details(1)
        .await
        .success()
        .expect("product 1 exists");

    assert_eq!(detail.product.id, 1);
    assert_eq!(detail.product.name, "Modern Velvet Sofa");
    assert_eq!(detail.product.category, "Seating");
    assert!(detail.product.material.is_some());
    assert!(detail.product.image_url.is_some());
}

#[tokio::test]
async fn missing_product_reports_not_found() {
    let (_db, control) = seeded_control("details-missing", CatalogView::Full).await;

    let envelope = control.get_product_details(9999).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.error_message(), Some("Product with ID 9999 not found"));
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let (_db, control) = seeded_control("categories", CatalogView::Full).await;

    let categories = control
        .list_categories()
        .await
        .success()
        .expect("categories load")
        .categories;

    assert_eq!(
        categories,
        vec!["Bedroom", "Decor", "Lighting", "Rugs", "Seating", "Tables"]
    );
}

#[tokio::test]
async fn minimal_view_lists_every_product_by_name() {
    let (_db, control) = seeded_control("minimal", CatalogView::Minimal).await;

    let listed = control.list_products().await.success().expect("listing succeeds");

    assert_eq!(listed.count, 10);
    assert!(
        listed
            .products
            .iter()
            .all(|entry| matches!(entry, CatalogEntry::Summary(_)))
    );
    let json = serde_json::to_value(&listed.products[0]).expect("entry serializes");
    assert_eq!(json, serde_json::json!({"id": 10, "name": "Abstract Wall Art"}));
}

#[tokio::test]
async fn catalog_document_groups_in_stock_products_by_category() {
    let (_db, control) = seeded_control("catalog", CatalogView::Full).await;

    let document = control.catalog_document().await.expect("catalog loads");

    assert_eq!(document.store, STORE_NAME);
    assert_eq!(document.total_products, 9);
    let order: Vec<(String, String)> = document
        .products
        .iter()
        .map(|entry| match entry {
            CatalogEntry::Full(product) => (product.category.clone(), product.name.clone()),
            CatalogEntry::Summary(summary) => (String::new(), summary.name.clone()),
        })
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert_eq!(order[0], ("Bedroom".to_string(), "Platform Bed Frame".to_string()));
}

#[tokio::test]
async fn minimal_catalog_document_lists_every_product_by_name() {
    let (_db, control) = seeded_control("catalog-minimal", CatalogView::Minimal).await;

    let document = control.catalog_document().await.expect("catalog loads");

    assert_eq!(document.total_products, 10);
    assert_eq!(document.products.len(), 10);
    assert!(
        document
            .products
            .iter()
            .all(|entry| matches!(entry, CatalogEntry::Summary(_)))
    );
    let first = serde_json::to_value(&document.products[0]).expect("entry serializes");
    assert_eq!(first, serde_json::json!({"id": 10, "name": "Abstract Wall Art"}));

    let names: Vec<&str> = document.products.iter().map(CatalogEntry::name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn catalog_json_embeds_storage_errors() {
    let db = TestDb::new("catalog-error");
    let control = MinoanControlPlane::new(db.store());

    let body = control.catalog_json().await;
    let value: serde_json::Value = serde_json::from_str(&body).expect("body is json");

    let message = value["error"].as_str().expect("error field present");
    assert!(message.starts_with("Could not load catalog: "), "unexpected: {message}");
}

#[tokio::test]
async fn storage_failures_become_error_envelopes() {
    let db = TestDb::new("envelope-error");
    let control = MinoanControlPlane::new(db.store());

    let envelope = control.list_categories().await;

    let message = envelope.error_message().expect("error envelope");
    assert!(message.starts_with("Error fetching categories: "), "unexpected: {message}");
}

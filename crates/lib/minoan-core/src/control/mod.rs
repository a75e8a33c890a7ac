use std::{error::Error, fmt};

use minoan_store::schema::CatalogView;

use crate::store::{SqliteCatalogStore, StoreError};

pub mod catalog;
pub mod envelope;
pub mod orders;

pub use envelope::{CategoryList, Envelope, OrderConfirmation, ProductDetail, ProductList};

#[derive(Debug)]
pub enum ControlError {
    NotFound { product_id: i64 },
    OutOfStock { name: String },
    Store(StoreError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { product_id } => write!(f, "Product with ID {product_id} not found"),
            Self::OutOfStock { name } => write!(f, "Product '{name}' is currently out of stock"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Query service over the catalog store.
///
/// Every public operation returns an [`Envelope`]; failures never escape as
/// errors.
#[derive(Debug, Clone)]
pub struct MinoanControlPlane {
    store: SqliteCatalogStore,
    view: CatalogView,
}

impl MinoanControlPlane {
    #[must_use]
    pub const fn new(store: SqliteCatalogStore) -> Self {
        Self {
            store,
            view: CatalogView::Full,
        }
    }

    #[must_use]
    pub const fn with_view(mut self, view: CatalogView) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &SqliteCatalogStore {
        &self.store
    }
}

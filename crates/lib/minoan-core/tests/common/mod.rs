#![allow(dead_code)]

use std::path::PathBuf;

use minoan_core::control::MinoanControlPlane;
use minoan_core::store::SqliteCatalogStore;
use minoan_store::schema::CatalogView;

/// Database file under the temp dir, removed with its WAL files on drop.
pub struct TestDb {
    path: PathBuf,
}

impl TestDb {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!("minoan-{label}-{}.db", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn store(&self) -> SqliteCatalogStore {
        SqliteCatalogStore::new(self.path.clone())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn seeded_control(label: &str, view: CatalogView) -> (TestDb, MinoanControlPlane) {
    let db = TestDb::new(label);
    let store = db.store();
    store.bootstrap().await.expect("bootstrap should succeed");
    (db, MinoanControlPlane::new(store).with_view(view))
}

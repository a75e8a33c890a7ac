use minoan_store::schema::{CATALOG_MIME_TYPE, CATALOG_URI};
use rmcp::ErrorData;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use serde_json::json;

use crate::MinoanMcp;

/// Resources advertised by the server.
pub fn catalog_resources() -> Vec<Resource> {
    let mut catalog = RawResource::new(CATALOG_URI, "catalog".to_string());
    catalog.description = Some("The full Minoan product catalog as JSON.".to_string());
    catalog.mime_type = Some(CATALOG_MIME_TYPE.to_string());
    vec![catalog.no_annotation()]
}

impl MinoanMcp {
    /// Reads a resource by uri. Only the catalog is served.
    ///
    /// # Errors
    /// Returns a resource-not-found error for any other uri.
    pub async fn read_catalog(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        if uri != CATALOG_URI {
            return Err(ErrorData::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            ));
        }

        let body = self.control.catalog_json().await;
        let mut contents = ResourceContents::text(body, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(CATALOG_MIME_TYPE.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

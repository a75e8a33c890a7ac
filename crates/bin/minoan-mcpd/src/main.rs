//! Daemon entry point for the Minoan catalog MCP server.
//!
//! Loads configuration, prepares the catalog database, and serves the MCP
//! protocol over stdio or streamable HTTP.

mod config;

use minoan_core::control::MinoanControlPlane;
use minoan_core::store::SqliteCatalogStore;
use minoan_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing_subscriber::EnvFilter;

use crate::config::MinoanConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = MinoanConfig::from_args()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        path = %config.db_path.display(),
        view = config.catalog_view.as_str(),
        "starting minoan MCP server"
    );

    let store = SqliteCatalogStore::new(config.db_path.clone());
    store.bootstrap().await?;
    let control = MinoanControlPlane::new(store).with_view(config.catalog_view);

    if config.enable_stdio {
        serve_stdio(control).await
    } else {
        let http = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.mcp_stateful);
        serve_streamable_http(control, http).await
    }
}

//! shopscan server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use shopscan::api;
use shopscan::application::search_service::ProductSearchService;
use shopscan::infrastructure::config::FetcherConfig;
use shopscan::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|raw| raw.parse())
        .transpose()
        .context("PORT must be a port number")?
        .unwrap_or(3000);

    let service = Arc::new(
        ProductSearchService::new(FetcherConfig::default())
            .context("failed to build search service")?,
    );
    let app = api::router(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("server listening on http://{addr}");
    info!("scrape endpoint: http://localhost:{port}/api/scrape?keyword=<search term>");
    info!("health check: http://localhost:{port}/api/health");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

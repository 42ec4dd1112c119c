//! Backend entry-point: wires the wish endpoints and OpenAPI docs.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::WishService;
use backend::inbound::http::state::HttpState;
use backend::outbound::storage::{FsPhotoStore, InMemoryWishRepository};
use backend::server::{self, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    tokio::fs::create_dir_all(config.uploads_dir()).await?;

    let service = WishService::new(
        Arc::new(InMemoryWishRepository::new()),
        Arc::new(FsPhotoStore::new(config.uploads_dir().to_path_buf())),
    );
    let state = web::Data::new(HttpState::new(Arc::new(service)));

    info!(
        port = config.port(),
        uploads_dir = %config.uploads_dir().display(),
        "starting wish submission service"
    );
    server::run(&config, state)?.await
}

use std::net::SocketAddr;
use std::path::PathBuf;

use tower_http::services::ServeDir;
use tracing::{info, Level};

use tip_splitter_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let app_state = initialize_backend();

    // API routes plus the built frontend as a static fallback
    let app = create_router(app_state)
        .fallback_service(ServeDir::new(PathBuf::from("../frontend/dist")));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! # Backend Module
//!
//! Contains all non-UI logic for the tip splitter application.
//!
//! The backend is designed to be UI-agnostic: the Yew frontend talks to it
//! over HTTP, but nothing here assumes a particular client.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (calculation, validation)
//! ```

pub mod domain;
pub mod io;

use axum::{
    http::{HeaderValue, Method},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::CalculatorService;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub calculator_service: CalculatorService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    info!("Setting up domain services");
    let calculator_service = CalculatorService::new();

    AppState { calculator_service }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the dev frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new().route("/calculate", post(io::rest::calculate));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

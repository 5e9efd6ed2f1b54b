use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(crate::api::handlers::analyze::analyze))
        .route("/health", get(crate::api::handlers::health::health))
}

//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer, built on the Axum web framework.
//!
//! # API Endpoints
//!
//! - `POST /analyze` - Run the due-diligence analysis for a company
//! - `GET /health` - Health check endpoint
//!
//! Requests and responses are JSON; the only client-visible failure is a
//! `400` for a missing or empty company name. Everything else degrades
//! into Unclear records rather than failing the request.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI description of the public API surface.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::analyze::analyze, handlers::health::health),
    components(schemas(
        crate::types::AnalyzeRequest,
        crate::types::AnalysisResponse,
        crate::types::FaqRecord
    ))
)]
pub struct ApiDoc;

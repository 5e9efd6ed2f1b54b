//! # Diligence Server
//!
//! A due-diligence analysis server: given a company name, it fans out one
//! external research worker process per fixed due-diligence question,
//! waits for all of them to finish, parses each worker's markdown report
//! into a yes/no/unclear verdict plus supporting text, and returns the
//! aggregate as a single response.
//!
//! ## Overview
//!
//! The server exposes one operational endpoint:
//!
//! ```text
//! POST /analyze  { "company_name": "Acme" }
//!   -> 200 { "faqs": [ { "label": ..., "flag": ..., "content": ... } x3 ] }
//!   -> 400 { "error": "Company name is required" }
//! ```
//!
//! Research itself happens out of process: each question is handed to the
//! configured worker command as a single argument, and the worker's only
//! contract is to terminate in finite time and leave a markdown report at
//! a path derived from the question text. Workers that crash, complain on
//! stderr, or never write their report degrade into Unclear records
//! rather than failing the request.
//!
//! ## Configuration
//!
//! Environment variables (a `.env` file is honored):
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOST` | `127.0.0.1` | Bind address |
//! | `PORT` | `5001` | Bind port |
//! | `RESEARCH_DIR` | `data/research` | Where workers write reports |
//! | `RESEARCH_WORKER` | `research-worker` | Worker command |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`research`] - topic formulation, worker dispatch, report extraction
//! - [`types`] - common types and error handling
//! - [`utils`] - configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Concurrent due-diligence research orchestration.
pub mod research;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use types::{AnalysisResponse, AppError, FaqRecord, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-wide configuration
    pub config: Arc<Config>,
}

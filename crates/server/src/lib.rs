//! HTTP server for the lead agent
//!
//! Thin layer over the engine: session lookup, request/response DTOs, CORS,
//! and request tracing. All conversation logic lives in the engine crate.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

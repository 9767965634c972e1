//! Chat delegate client
//!
//! The delegate is the external AI chat service that produces free-form
//! replies for the agent. It is treated as an opaque boundary: any transport
//! error or non-2xx status collapses into a single failure signal, and the
//! engine replaces it with scripted fallback text. No retries are performed.

pub mod client;

pub use client::{ChatDelegate, DelegateRequest, DelegateResponse, HttpChatDelegate};

use thiserror::Error;

/// Delegate errors
///
/// Callers only branch on "failed or not"; the variants exist for logging.
#[derive(Error, Debug)]
pub enum DelegateError {
    #[error("Delegate not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Delegate returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

//! HTTP endpoints

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use lead_agent_core::LeadStatus;
use lead_agent_dispatch::{ContactSubmission, CONTACT_FALLBACK_REPLY, DISPATCH_SUCCESS_REPLY};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/send-to-discord", post(send_to_discord))
        .route("/api/contact", post(contact))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

/// Service info
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "Vicky AI Systems API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "chat": "/api/chat",
            "contact": "/api/contact",
            "health": "/health"
        },
        "contact": {
            "email": "npdimagine@gmail.com",
            "phone": "+91 83838 48219",
            "github": "https://github.com/algsoch",
            "linkedin": "https://www.linkedin.com/in/algsoch"
        }
    }))
}

/// Health check
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    session_id: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    session_id: String,
    timestamp: String,
}

/// Chat endpoint: runs the full engine pipeline for one message
///
/// The session is removed from the store for the duration of the call and
/// reinserted afterwards, so one message per session is processed at a time.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let mut session = state.take_session(request.session_id);

    let reply = state.engine.handle_message(&mut session, &request.message).await;
    let session_id = session.id.clone();
    state.store_session(session);

    Json(ChatResponse {
        response: reply.text,
        session_id,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Manual escalation request (the "send to Vicky" button)
#[derive(Debug, Deserialize)]
struct SendRequest {
    session_id: String,
    #[serde(default)]
    deal_status: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendResponse {
    success: bool,
    message: String,
}

fn parse_deal_status(raw: Option<&str>) -> LeadStatus {
    match raw {
        Some("deal_confirmed") => LeadStatus::DealConfirmed,
        Some("contact_requested") => LeadStatus::ContactRequested,
        _ => LeadStatus::Interested,
    }
}

/// Manual escalation endpoint
async fn send_to_discord(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>, StatusCode> {
    let session = state
        .sessions
        .get(&request.session_id)
        .map(|entry| entry.clone())
        .ok_or(StatusCode::NOT_FOUND)?;

    let status = parse_deal_status(request.deal_status.as_deref());
    let success = state.engine.dispatch_lead(&session, status).await;

    let message = if success {
        DISPATCH_SUCCESS_REPLY
    } else {
        CONTACT_FALLBACK_REPLY
    };

    Ok(Json(SendResponse {
        success,
        message: message.to_string(),
    }))
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    success: bool,
    message: String,
    ticket_id: String,
}

/// Contact form endpoint
async fn contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Json<ContactResponse> {
    let ticket_id = format!("TICKET_{}", Utc::now().format("%Y%m%d%H%M%S"));
    tracing::info!(ticket_id = %ticket_id, email = %submission.email, "Contact form received");

    let success = state.dispatcher.dispatch_contact(&submission).await;

    Json(ContactResponse {
        success,
        message: "Thank you! I'll respond within 24-48 hours with a concrete plan.".to_string(),
        ticket_id,
    })
}

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::router::RelayState;

/// GET / — static description of the inbound surface. Never fails, never
/// touches the upstream.
pub async fn index() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "Odoo API Proxy Server",
        "endpoints": {
            "health": "/health",
            "authenticate": "POST /api/authenticate",
            "create_contact": "POST /api/create-contact",
            "fetch_contacts": "GET /api/contacts",
        },
    }))
}

/// GET /health — the configured upstream URL plus a current timestamp.
pub async fn health(State(state): State<RelayState>) -> Json<Value> {
    Json(json!({
        "status": "running",
        "odoo_url": state.cfg.odoo_url,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Fallback for any route/method the table does not know.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": "This endpoint does not exist",
            "path": uri.path(),
        })),
    )
}

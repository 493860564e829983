use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::router::RelayState;
use crate::types::rpc::{NewContact, RpcOutcome};

const AUTH_FAILED: &str = "Authentication failed";
const CREATE_FAILED: &str = "Failed to create contact";
const FETCH_FAILED: &str = "Failed to fetch contacts";

/// POST /api/authenticate — the request body is ignored. Relays the upstream
/// envelope on success, whether or not it carries a uid.
pub async fn authenticate(State(state): State<RelayState>) -> Result<Json<Value>, RelayError> {
    info!("authenticating against odoo");
    let reply = state
        .odoo
        .authenticate()
        .await
        .inspect_err(|e| error!(error = %e, "authenticate call failed"))
        .map_err(RelayError::upstream(AUTH_FAILED))?;

    if let Some(uid) = reply.uid() {
        state.record_session(uid);
    }
    Ok(Json(reply.into_raw()))
}

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// POST /api/create-contact — validate, authenticate, then create. The two
/// outbound calls are strictly sequential; a failure at any step ends the
/// request.
pub async fn create_contact(
    State(state): State<RelayState>,
    Json(req): Json<CreateContactRequest>,
) -> Result<Json<Value>, RelayError> {
    if req.name.is_empty() || req.phone.is_empty() {
        return Err(RelayError::Input("Name and phone are required"));
    }
    info!(name = %req.name, "creating contact");

    let auth = state
        .odoo
        .authenticate()
        .await
        .inspect_err(|e| error!(error = %e, "authenticate call failed"))
        .map_err(RelayError::upstream(CREATE_FAILED))?;
    let Some(uid) = auth.uid() else {
        warn!("odoo rejected the configured credentials");
        return Err(RelayError::AuthRejected);
    };
    state.record_session(uid);

    let contact = NewContact {
        name: req.name,
        phone: req.phone,
    };
    let reply = state
        .odoo
        .create_contact(&contact)
        .await
        .inspect_err(|e| error!(error = %e, "create call failed"))
        .map_err(RelayError::upstream(CREATE_FAILED))?;

    match reply.outcome() {
        RpcOutcome::Result(result) => {
            info!(name = %contact.name, "contact created");
            Ok(Json(json!({
                "success": true,
                "result": result,
                "message": format!("Contact {} created successfully!", contact.name),
            })))
        }
        RpcOutcome::Error(details) => {
            warn!(name = %contact.name, "odoo refused the create call");
            Err(RelayError::OdooRejected {
                context: CREATE_FAILED,
                details,
            })
        }
    }
}

/// GET /api/contacts — authenticate, then relay the search_read reply
/// verbatim.
pub async fn list_contacts(State(state): State<RelayState>) -> Result<Json<Value>, RelayError> {
    info!("fetching contacts");
    let auth = state
        .odoo
        .authenticate()
        .await
        .inspect_err(|e| error!(error = %e, "authenticate call failed"))
        .map_err(RelayError::upstream(FETCH_FAILED))?;
    if auth.uid().is_none() {
        warn!("odoo rejected the configured credentials");
        return Err(RelayError::AuthRejected);
    }

    let reply = state
        .odoo
        .search_contacts()
        .await
        .inspect_err(|e| error!(error = %e, "search_read call failed"))
        .map_err(RelayError::upstream(FETCH_FAILED))?;
    Ok(Json(reply.into_raw()))
}

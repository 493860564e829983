use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, warn};

use crate::api::odoo::OdooClient;
use crate::config::Config;
use crate::handlers::{contacts, meta};

/// Shared state handed to every inbound handler.
#[derive(Clone)]
pub struct RelayState {
    pub odoo: Arc<OdooClient>,
    pub cfg: Arc<Config>,
    last_uid: Arc<AtomicI64>,
}

impl RelayState {
    pub fn new(cfg: Config, odoo: OdooClient) -> Self {
        Self {
            odoo: Arc::new(odoo),
            cfg: Arc::new(cfg),
            last_uid: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Record the last authenticated uid. Advisory only: concurrent writes may
    /// race, and nothing reads the value to gate behavior.
    pub fn record_session(&self, uid: i64) {
        self.last_uid.store(uid, Ordering::Relaxed);
        debug!(uid, "session recorded");
    }
}

pub fn relay_router(state: RelayState) -> Router {
    let cors = cors_layer(&state.cfg);
    Router::new()
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        .route("/api/authenticate", post(contacts::authenticate))
        .route("/api/create-contact", post(contacts::create_contact))
        .route("/api/contacts", get(contacts::list_contacts))
        .fallback(meta::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Exact-origin allow-list with credentials; browsers only send JSON bodies.
fn cors_layer(cfg: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(origin = %origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, body::Body, extract::State, http::Response, routing::post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use odoo_relay::api::odoo::OdooClient;
use odoo_relay::config::Config;
use odoo_relay::router::{RelayState, relay_router};

/// Scripted JSON-RPC upstream: serves a fixed authenticate body and a fixed
/// call_kw body while counting hits per path.
#[derive(Clone)]
pub struct MockOdoo {
    pub auth_calls: Arc<AtomicUsize>,
    pub call_kw_calls: Arc<AtomicUsize>,
    auth_body: Arc<Value>,
    call_kw_body: Arc<Value>,
}

impl MockOdoo {
    pub fn auth_count(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn call_kw_count(&self) -> usize {
        self.call_kw_calls.load(Ordering::SeqCst)
    }
}

pub async fn spawn_mock_odoo(auth_body: Value, call_kw_body: Value) -> (String, MockOdoo) {
    let mock = MockOdoo {
        auth_calls: Arc::new(AtomicUsize::new(0)),
        call_kw_calls: Arc::new(AtomicUsize::new(0)),
        auth_body: Arc::new(auth_body),
        call_kw_body: Arc::new(call_kw_body),
    };

    let app = Router::new()
        .route("/web/session/authenticate", post(serve_auth))
        .route("/web/dataset/call_kw/{model}/{method}", post(serve_call_kw))
        .with_state(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), mock)
}

async fn serve_auth(State(mock): State<MockOdoo>) -> Json<Value> {
    mock.auth_calls.fetch_add(1, Ordering::SeqCst);
    Json((*mock.auth_body).clone())
}

async fn serve_call_kw(State(mock): State<MockOdoo>) -> Json<Value> {
    mock.call_kw_calls.fetch_add(1, Ordering::SeqCst);
    Json((*mock.call_kw_body).clone())
}

/// A base URL with nothing listening behind it, for transport-failure cases.
pub async fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(base_url: &str) -> Config {
    let mut cfg = Config::default();
    cfg.odoo_url = base_url.parse().unwrap();
    cfg
}

pub fn build_app(cfg: Config) -> Router {
    let odoo = OdooClient::new(&cfg).unwrap();
    relay_router(RelayState::new(cfg, odoo))
}

pub fn auth_ok() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": null,
        "result": { "uid": 2, "db": "dbbrazen", "username": "admin" }
    })
}

pub fn auth_rejected() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": null,
        "result": { "uid": false }
    })
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

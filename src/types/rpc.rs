use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound JSON-RPC envelope: `{jsonrpc: "2.0", method: "call", params}`.
#[derive(Debug, Serialize)]
pub struct RpcRequest<P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
}

impl<P> RpcRequest<P> {
    pub fn call(params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params,
        }
    }
}

/// Params for `/web/session/authenticate`.
#[derive(Debug, Serialize)]
pub struct AuthParams<'a> {
    pub db: &'a str,
    pub login: &'a str,
    pub password: &'a str,
}

/// Params for `/web/dataset/call_kw/{model}/{method}`.
#[derive(Debug, Serialize)]
pub struct CallKwParams<A, K> {
    pub model: &'static str,
    pub method: &'static str,
    pub args: A,
    pub kwargs: K,
}

/// Fields sent when creating a contact. Everything else about the record is
/// owned by the upstream.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
}

/// Keyword arguments of the contact `search_read` call.
#[derive(Debug, Serialize)]
pub struct SearchReadKwargs {
    pub fields: &'static [&'static str],
    pub limit: u32,
}

/// Kwargs placeholder serializing to `{}`.
#[derive(Debug, Serialize)]
pub struct NoKwargs {}

/// Tagged view of a JSON-RPC reply: an `error` member wins over `result`.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    Result(Value),
    Error(Value),
}

/// A parsed JSON-RPC reply.
///
/// The raw body is retained so the relay endpoints can hand the upstream JSON
/// back unmodified; the typed accessors only read from it.
#[derive(Debug, Clone)]
pub struct RpcEnvelope {
    raw: Value,
}

impl RpcEnvelope {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// A reply carrying neither member counts as an error with null details,
    /// mirroring the falsy-result branch of the upstream contract.
    pub fn outcome(&self) -> RpcOutcome {
        if let Some(error) = self.raw.get("error") {
            return RpcOutcome::Error(error.clone());
        }
        match self.raw.get("result") {
            Some(result) if !result.is_null() => RpcOutcome::Result(result.clone()),
            _ => RpcOutcome::Error(Value::Null),
        }
    }

    /// Authenticated user id. Present only when `result.uid` is a non-zero
    /// integer; Odoo reports `uid: false` for rejected logins.
    pub fn uid(&self) -> Option<i64> {
        self.raw
            .pointer("/result/uid")
            .and_then(Value::as_i64)
            .filter(|uid| *uid != 0)
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}

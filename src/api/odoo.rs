use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::TransportError;
use crate::types::rpc::{
    AuthParams, CallKwParams, NewContact, NoKwargs, RpcEnvelope, RpcRequest, SearchReadKwargs,
};

const AUTHENTICATE_PATH: &str = "/web/session/authenticate";
const CALL_KW_PATH: &str = "/web/dataset/call_kw";
const CONTACT_MODEL: &str = "res.partner";
const CONTACT_FIELDS: &[&str] = &["id", "name", "email", "phone"];
const CONTACT_PAGE_LIMIT: u32 = 20;

/// Fixed per-call deadline; a call past it is a transport failure. No retries.
const CALL_DEADLINE: Duration = Duration::from_secs(10);

/// Outbound JSON-RPC client for the Odoo backend.
///
/// One instance is shared by every inbound request. The cookie store carries
/// the session cookie issued by `authenticate` into the dependent call.
#[derive(Clone)]
pub struct OdooClient {
    http: reqwest::Client,
    base: Url,
    db: String,
    login: String,
    password: String,
}

impl OdooClient {
    pub fn new(cfg: &Config) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("odoo-relay/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .timeout(CALL_DEADLINE)
            .build()?;
        Ok(Self {
            http,
            base: cfg.odoo_url.clone(),
            db: cfg.odoo_database.clone(),
            login: cfg.odoo_username.clone(),
            password: cfg.odoo_password.clone(),
        })
    }

    /// One authenticate call with the configured credentials.
    pub async fn authenticate(&self) -> Result<RpcEnvelope, TransportError> {
        let params = AuthParams {
            db: &self.db,
            login: &self.login,
            password: &self.password,
        };
        self.call(AUTHENTICATE_PATH, &RpcRequest::call(params)).await
    }

    /// `create` on the contact model with `[{name, phone}]` args.
    pub async fn create_contact(&self, contact: &NewContact) -> Result<RpcEnvelope, TransportError> {
        let params = CallKwParams {
            model: CONTACT_MODEL,
            method: "create",
            args: (contact,),
            kwargs: NoKwargs {},
        };
        let path = format!("{CALL_KW_PATH}/{CONTACT_MODEL}/create");
        self.call(&path, &RpcRequest::call(params)).await
    }

    /// `search_read` on the contact model: empty domain, fixed field list,
    /// first twenty records.
    pub async fn search_contacts(&self) -> Result<RpcEnvelope, TransportError> {
        let params = CallKwParams {
            model: CONTACT_MODEL,
            method: "search_read",
            args: (Vec::<Value>::new(),),
            kwargs: SearchReadKwargs {
                fields: CONTACT_FIELDS,
                limit: CONTACT_PAGE_LIMIT,
            },
        };
        let path = format!("{CALL_KW_PATH}/{CONTACT_MODEL}/search_read");
        self.call(&path, &RpcRequest::call(params)).await
    }

    async fn call<P: Serialize>(
        &self,
        path: &str,
        request: &RpcRequest<P>,
    ) -> Result<RpcEnvelope, TransportError> {
        let url = self.base.join(path)?;
        debug!(%url, "issuing JSON-RPC call");
        let body = self
            .http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(RpcEnvelope::new(body))
    }
}

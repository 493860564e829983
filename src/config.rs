use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Process-wide configuration, loaded once at startup.
///
/// Every field has a default so the relay runs against a local Odoo with no
/// environment at all. Credentials live here and are never echoed back in
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub odoo_url: Url,
    pub odoo_database: String,
    pub odoo_username: String,
    pub odoo_password: String,
    pub port: u16,
    pub loglevel: String,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odoo_url: Url::parse("http://localhost:8069").expect("default odoo url is valid"),
            odoo_database: "dbbrazen".to_string(),
            odoo_username: "admin".to_string(),
            odoo_password: "admin".to_string(),
            port: 3001,
            loglevel: "info".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
                "https://react-odoo-demo.vercel.app".to_string(),
            ],
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Env::raw().only(&[
            "odoo_url",
            "odoo_database",
            "odoo_username",
            "odoo_password",
            "port",
            "loglevel",
            "allowed_origins",
        ]))
        .extract()
        .expect("FATAL: invalid relay configuration")
});

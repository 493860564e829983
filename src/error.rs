use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};
use thiserror::Error as ThisError;

/// Failure of a single outbound call, before any endpoint context is attached.
#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, ThisError)]
pub enum RelayError {
    /// Client input error; the upstream is never contacted.
    #[error("{0}")]
    Input(&'static str),

    /// Odoo answered the authenticate call without a usable uid.
    #[error("Authentication failed")]
    AuthRejected,

    /// Odoo answered the business call with an `error` member.
    #[error("{context}")]
    OdooRejected {
        context: &'static str,
        details: Value,
    },

    /// Network failure, timeout, or non-2xx status on an outbound call.
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: TransportError,
    },
}

impl RelayError {
    /// Binds an endpoint context for `map_err` on an outbound call result.
    pub fn upstream(context: &'static str) -> impl FnOnce(TransportError) -> Self {
        move |source| Self::Upstream { context, source }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            RelayError::Input(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            RelayError::AuthRejected => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Authentication failed" }),
            ),
            RelayError::OdooRejected { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": context, "details": details }),
            ),
            RelayError::Upstream { context, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": context, "message": source.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::RelayError;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    #[test]
    fn input_error_maps_to_400() {
        let resp = RelayError::Input("Name and phone are required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn odoo_rejection_maps_to_500() {
        let resp = RelayError::OdooRejected {
            context: "Failed to create contact",
            details: json!({ "code": 200 }),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

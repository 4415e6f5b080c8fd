//! Blocking HTTP transport for the workspace API.

use lifedesk_core::endpoints::{Transport, TransportError};
use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::Value;
use tracing::trace;

const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1/";
const API_VERSION: &str = "2022-06-28";

/// A bearer-authenticated client speaking the versioned JSON protocol.
pub struct ApiClient {
    http: Client,
    secret: String,
    base_url: String,
}

impl ApiClient {
    pub fn new(secret: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            http: Client::new(),
            secret: secret.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        trace!(%method, %url, "request");
        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.secret)
            .header("Notion-Version", API_VERSION);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .map_err(|err| TransportError::new(format!("{path}: {err}")))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .map_err(|err| TransportError::new(format!("{path}: invalid response body: {err}")))?;
        if !status.is_success() {
            let detail = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no error message");
            return Err(TransportError::new(format!("{status} on {path}: {detail}")));
        }
        Ok(payload)
    }
}

impl Transport for ApiClient {
    fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.send(Method::GET, path, None)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.send(Method::POST, path, Some(body))
    }

    fn patch(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.send(Method::PATCH, path, Some(body))
    }
}

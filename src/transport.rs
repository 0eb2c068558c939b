//! Transport layer for the Twitter/X API.
//!
//! This module defines the [`Transport`] trait (the contract every client
//! operation dispatches through) and [`HttpTransport`], a ready-made
//! implementation built on `reqwest`. The trait is the seam for substituting
//! a stub transport in tests.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::Credentials;
use crate::error::BoxError;

/// Outbound parameter mapping sent with every request.
pub type Params = Map<String, Value>;

/// Base URL for the Twitter API v1.1 endpoints.
const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1";

/// The authenticated HTTP collaborator every operation dispatches through.
///
/// A transport exposes one read and one write operation, each accepting a
/// route name and a parameter mapping and completing exactly once with either
/// a response payload or an error. Errors are returned as opaque boxed values;
/// the client passes them through to the caller uninterpreted.
///
/// Routes may contain `:name` placeholder segments (e.g.
/// `statuses/retweet/:id`); the transport substitutes those from the matching
/// parameter-map entries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a read (GET) request to the named route.
    async fn get(&self, route: &str, params: &Params) -> Result<Value, BoxError>;

    /// Issues a write (POST) request to the named route.
    async fn post(&self, route: &str, params: &Params) -> Result<Value, BoxError>;
}

/// Renders a JSON value as a plain string for URLs and query strings.
///
/// Strings are used as-is (no surrounding quotes); everything else uses its
/// JSON rendering.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `reqwest`-based [`Transport`] implementation for the Twitter API v1.1.
///
/// Requests authenticate with the access token in an `Authorization` header.
/// OAuth 1.0a request signing is out of scope for this crate; the consumer
/// key and secret are held for the transport's lifetime but take no part in
/// request construction.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// Creates a transport bound to the given credentials.
    ///
    /// This is configuration only: no network call is made here. Invalid
    /// credentials surface later, on the first request.
    pub fn connect(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Creates a transport targeting a non-default base URL.
    ///
    /// Used by tests to point the transport at a local mock server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("Configuring HTTP transport for base URL: {}", base_url);
        HttpTransport {
            client: Client::new(),
            base_url,
            credentials,
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.credentials.access_token)
    }

    /// Builds the full request URL for a route, substituting `:name` path
    /// segments from the parameter map.
    ///
    /// Substituted entries are removed from the returned parameters so they
    /// are not sent twice.
    fn build_url(&self, route: &str, params: &Params) -> (String, Params) {
        let mut remaining = params.clone();
        let path: Vec<String> = route
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => match remaining.remove(name) {
                    Some(value) => urlencoding::encode(&value_to_string(&value)).into_owned(),
                    None => segment.to_string(),
                },
                None => segment.to_string(),
            })
            .collect();
        let url = format!("{}/{}.json", self.base_url, path.join("/"));
        (url, remaining)
    }

    /// Sends a prepared request and converts the outcome.
    ///
    /// A 2xx response parses the body as JSON (empty bodies become JSON
    /// null); anything else becomes an error carrying the status and body.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
    ) -> Result<Value, BoxError> {
        let response = request
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let status = response.status();
        debug!(
            "Received response with status {} for operation: {}",
            status, operation
        );

        let body = response.text().await?;
        if status.is_success() {
            info!("Operation '{}' completed successfully", operation);
            if body.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(serde_json::from_str(&body)?)
            }
        } else {
            Err(format!("Twitter API error ({}) for route '{}': {}", status, operation, body).into())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, route: &str, params: &Params) -> Result<Value, BoxError> {
        let (url, query) = self.build_url(route, params);
        let url = if query.is_empty() {
            url
        } else {
            let query_string = query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&value_to_string(value))
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", url, query_string)
        };

        info!("Sending GET request to {}", url);
        self.execute(self.client.get(&url), route).await
    }

    async fn post(&self, route: &str, params: &Params) -> Result<Value, BoxError> {
        let (url, body) = self.build_url(route, params);

        info!("Sending POST request to {}", url);
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&Value::Object(body));
        self.execute(request, route).await
    }
}

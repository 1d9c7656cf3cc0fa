// SPDX-License-Identifier: MIT
//! Authenticated HTTP transport for the TrueNAS v2.0 REST API.
//!
//! One [`ApiClient`] is built per invocation and performs exactly one request.
//! Every failure along the way — client construction, network, non-2xx
//! status, undecodable body — is a [`TransportError`], which the dispatcher
//! maps uniformly to an UNKNOWN verdict. Transport problems never surface as
//! WARNING or CRITICAL.

use serde_json::Value;
use tracing::debug;

use crate::auth::AuthMode;
use crate::config::ProbeConfig;

/// HTTP method for an API call.
///
/// The API is queried with GET except for update-checking, which the upstream
/// models as a state-changing action (POST).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

/// A transport-level failure. Always collapses to UNKNOWN, never retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client bound to one appliance's base URL and auth mode.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth: AuthMode,
}

impl ApiClient {
    /// Build the client from the probe configuration.
    pub fn new(config: &ProbeConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);

        if !config.verify_cert {
            // Accept any certificate, quietly — the plugin line on stdout must
            // stay the only output the monitoring framework sees.
            debug!("TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(TransportError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            auth: AuthMode::resolve(config.user.as_deref(), &config.secret),
        })
    }

    /// Full URL for a resource. The API requires the trailing slash.
    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource)
    }

    /// Perform one GET or POST against `resource` and decode the JSON body.
    pub async fn request(
        &self,
        resource: &str,
        method: RequestMethod,
    ) -> Result<Value, TransportError> {
        let url = self.resource_url(resource);
        debug!(url = %url, method = ?method, "sending API request");

        let builder = match method {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
        };

        let builder = match &self.auth {
            AuthMode::Basic { user, secret } => builder.basic_auth(user, Some(secret)),
            AuthMode::Bearer { token } => builder.bearer_auth(token),
        };

        let response = builder.send().await.map_err(|source| TransportError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;
        debug!(body = %body, "API response");

        serde_json::from_str(&body).map_err(|source| TransportError::Decode { url, source })
    }
}

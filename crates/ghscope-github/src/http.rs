//! reqwest implementation of the transport gateway.
//!
//! One GET per call, no retries. Status codes and bodies are passed through
//! untouched so that core validation sees exactly what the server sent.

use std::fmt;

use async_trait::async_trait;
use ghscope_core::{RawResponse, TransportError, TransportGateway};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::config::GithubClientConfig;
use crate::error::GatewayResult;
use crate::url::{endpoint_url, parse_base_url};

/// Media type recommended by the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Production transport gateway backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestGateway {
    /// Build a gateway from configuration.
    pub fn new(config: &GithubClientConfig) -> GatewayResult<Self> {
        let base_url = parse_base_url(config.base_url())?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build a gateway with default configuration.
    pub fn default_gateway() -> GatewayResult<Self> {
        Self::new(&GithubClientConfig::default())
    }

    /// The normalized API base URL.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Map a reqwest failure to the core transport error.
fn map_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect {
            message: err.to_string(),
        }
    } else {
        TransportError::Request {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl TransportGateway for ReqwestGateway {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = endpoint_url(&self.base_url, path).map_err(|e| TransportError::Request {
            message: format!("invalid endpoint path '{path}': {e}"),
        })?;

        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_error(&e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| map_error(&e))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

impl fmt::Debug for ReqwestGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestGateway")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

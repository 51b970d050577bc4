//! The news client: one GET request, one normalized result.
//!
//! # Design
//! `NewsClient` holds its configuration and an injected `Transport` and
//! carries no mutable state between calls. `get_news` is split the same way
//! the wire exchange is: `build_get_news` produces the `HttpRequest`,
//! the transport executes it, and `parse_get_news` turns the `HttpResponse`
//! into either the untouched body or a `RequestError`. The build and parse
//! halves never touch the network and can be driven directly.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::NewsConfig;
use crate::error::{ConfigError, RequestError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::NewsFeed;

/// Client for the news API.
///
/// Every call to `get_news` issues exactly one request through the
/// transport. Concurrent calls are independent of each other.
#[derive(Debug, Clone)]
pub struct NewsClient<T> {
    config: NewsConfig,
    transport: T,
}

impl NewsClient<ReqwestTransport> {
    /// Build a client from `NEWS_API_URL` / `NEWS_API_KEY` with the default
    /// reqwest transport.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(NewsConfig::from_env()?, ReqwestTransport::new()))
    }
}

impl<T> NewsClient<T> {
    pub fn new(config: NewsConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {url}?access_key={key}`, no headers, no body.
    ///
    /// The key is percent-encoded, so only URL-safe keys appear verbatim.
    pub fn build_get_news(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!(
                "{}?access_key={}",
                self.config.url,
                urlencoding::encode(&self.config.key)
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Return a 2xx body as-is; unwrap the nested `error` of anything else.
    pub fn parse_get_news(&self, response: HttpResponse) -> Result<NewsFeed, RequestError> {
        if !response.is_success() {
            return Err(RequestError::from_failed_response(
                response.status,
                &response.body,
            ));
        }
        if response.body.trim().is_empty() {
            return Ok(NewsFeed(Value::Null));
        }
        serde_json::from_str(&response.body)
            .map(NewsFeed)
            .map_err(|e| RequestError::from_malformed_body(&e))
    }
}

impl<T: Transport> NewsClient<T> {
    /// Fetch the news feed.
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn get_news(&self) -> Result<NewsFeed, RequestError> {
        let request = self.build_get_news();
        debug!(method = request.method.as_str(), "requesting news feed");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "news request did not complete");
                return Err(RequestError::from_transport(&err));
            }
        };
        debug!(status = response.status, bytes = response.body.len(), "news response received");

        self.parse_get_news(response)
            .inspect_err(|err| warn!(code = ?err.code, error = %err, "news request failed"))
    }
}

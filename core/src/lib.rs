//! Async client core for a mediastack-style news API.
//!
//! # Overview
//! `NewsClient` issues `GET {url}?access_key={key}` through an injected
//! `Transport` and returns the response body untouched. Every failure,
//! whatever its cause, reaches the caller as a single `RequestError`: the
//! nested `error` payload of the failed response, unwrapped one level.
//!
//! # Design
//! - `NewsClient` is stateless apart from its configuration, which is fixed
//!   at construction.
//! - The request is built and the response parsed by pure methods
//!   (`build_get_news` / `parse_get_news`), so the I/O boundary is explicit
//!   and the transport is swappable.
//! - No retries, caching, or timeouts are layered on top of the transport.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod transport;
pub mod types;

pub use client::NewsClient;
pub use config::NewsConfig;
pub use error::{ConfigError, RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockTransport;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Article, NewsFeed, NewsModel, Pagination};

//! Stand-in for the remote news API, used by integration tests and local
//! development.
//!
//! Serves `GET /v1/news?access_key=...` the way mediastack does: the
//! configured feed on a valid key, a nested `error` object otherwise.

pub mod config;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{debug, warn};

pub use config::{ConfigError, MockConfig};

pub const NEWS_PATH: &str = "/v1/news";

/// Shared server state. Clones share the hit counter.
#[derive(Clone)]
pub struct AppState {
    access_key: Arc<str>,
    feed: Arc<Value>,
    hits: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(access_key: impl Into<String>, feed: Value) -> Self {
        Self {
            access_key: Arc::from(access_key.into()),
            feed: Arc::new(feed),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests `/v1/news` has received, valid or not.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub access_key: Option<String>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(NEWS_PATH, get(list_news))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn list_news(State(state): State<AppState>, Query(query): Query<NewsQuery>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match query.access_key.as_deref() {
        None => {
            warn!("news request without access_key");
            (StatusCode::BAD_REQUEST, Json(missing_key_error())).into_response()
        }
        Some(key) if key.trim().is_empty() => {
            warn!("news request with empty access_key");
            (StatusCode::BAD_REQUEST, Json(missing_key_error())).into_response()
        }
        Some(key) if key != &*state.access_key => {
            warn!("news request with unknown access_key");
            (StatusCode::UNAUTHORIZED, Json(invalid_key_error())).into_response()
        }
        Some(_) => {
            debug!("serving news feed");
            (StatusCode::OK, Json((*state.feed).clone())).into_response()
        }
    }
}

pub fn missing_key_error() -> Value {
    json!({
        "error": {
            "code": "validation_error",
            "message": "Validation error: access_key is required",
            "context": {"access_key": ["required"]}
        }
    })
}

pub fn invalid_key_error() -> Value {
    json!({
        "error": {
            "code": "invalid_access_key",
            "message": "You have not supplied a valid API Access Key."
        }
    })
}

/// A two-article feed in mediastack's envelope.
pub fn sample_feed() -> Value {
    json!({
        "pagination": {"limit": 25, "offset": 0, "count": 2, "total": 2},
        "data": [
            {
                "author": "Jane Reporter",
                "title": "Central bank holds rates steady",
                "description": "Policy makers left the benchmark rate unchanged.",
                "url": "https://news.example.com/economy/rates",
                "source": "example-news",
                "image": null,
                "category": "business",
                "language": "en",
                "country": "us",
                "published_at": "2025-03-04T09:30:00+00:00"
            },
            {
                "author": null,
                "title": "Local team wins championship",
                "description": "A last-minute goal decided the final.",
                "url": "https://news.example.com/sports/final",
                "source": "example-news",
                "image": "https://news.example.com/img/final.jpg",
                "category": "sports",
                "language": "en",
                "country": "gb",
                "published_at": "2025-03-03T21:15:00+00:00"
            }
        ]
    })
}

pub fn empty_feed() -> Value {
    json!({
        "pagination": {"limit": 25, "offset": 0, "count": 0, "total": 0},
        "data": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_bodies_nest_a_message() {
        for body in [missing_key_error(), invalid_key_error()] {
            assert!(body["error"]["message"].is_string());
            assert!(body["error"]["code"].is_string());
        }
        assert!(missing_key_error()["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Validation error"));
    }

    #[test]
    fn sample_feed_counts_match_data() {
        let feed = sample_feed();
        let count = feed["pagination"]["count"].as_u64().unwrap();
        assert_eq!(feed["data"].as_array().unwrap().len() as u64, count);
    }

    #[test]
    fn empty_feed_has_no_articles() {
        assert_eq!(empty_feed()["data"], json!([]));
    }

    #[test]
    fn query_without_key_deserializes() {
        let query: NewsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.access_key.is_none());
    }

    #[test]
    fn state_clones_share_hit_counter() {
        let state = AppState::new("k", empty_feed());
        let clone = state.clone();
        clone.hits.fetch_add(1, Ordering::SeqCst);
        assert_eq!(state.hits(), 1);
    }
}

//! Response DTOs for the news API.
//!
//! # Design
//! `NewsFeed` is the body exactly as the API sent it. The client never
//! applies a schema on the request path. Callers who want typed access can
//! `decode` the feed into `NewsModel` or a model of their own.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded success body of a news request, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsFeed(pub Value);

impl NewsFeed {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `data` array of article records, if the body has one.
    pub fn articles(&self) -> Option<&Vec<Value>> {
        self.0.get("data").and_then(Value::as_array)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }
}

impl From<Value> for NewsFeed {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Typed view of a mediastack-style `/news` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsModel {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub data: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    pub total: u64,
}

/// A single article record. Every field except `title` and `url` is
/// optional upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn articles_reads_data_array() {
        let feed = NewsFeed(json!({"data": [{"title": "a"}, {"title": "b"}]}));
        assert_eq!(feed.articles().map(Vec::len), Some(2));
    }

    #[test]
    fn articles_absent_for_other_shapes() {
        assert!(NewsFeed(json!({"articles": []})).articles().is_none());
        assert!(NewsFeed(Value::Null).articles().is_none());
    }

    #[test]
    fn decode_into_news_model() {
        let feed = NewsFeed(json!({
            "pagination": {"limit": 25, "offset": 0, "count": 1, "total": 1},
            "data": [{
                "author": null,
                "title": "Rust 2024 ships",
                "description": "Edition released",
                "url": "https://example.com/rust",
                "source": "example",
                "image": null,
                "category": "technology",
                "language": "en",
                "country": "us",
                "published_at": "2025-02-20T10:00:00+00:00"
            }]
        }));
        let model: NewsModel = feed.decode().unwrap();
        assert_eq!(model.pagination.unwrap().limit, 25);
        assert_eq!(model.data.len(), 1);
        assert_eq!(model.data[0].title, "Rust 2024 ships");
        assert!(model.data[0].author.is_none());
    }

    #[test]
    fn decode_empty_feed() {
        let model: NewsModel = NewsFeed(json!({"data": []})).decode().unwrap();
        assert!(model.pagination.is_none());
        assert!(model.data.is_empty());
    }

    #[test]
    fn feed_serializes_transparently() {
        let body = json!({"articles": [{"title": "x"}]});
        let feed = NewsFeed(body.clone());
        assert_eq!(serde_json::to_value(&feed).unwrap(), body);
    }
}

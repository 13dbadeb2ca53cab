//! Backend REST client and response envelope handling.
//!
//! Every backend response is wrapped in `{success, code, message, data, timestamp}`.
//! List endpoints are inconsistent upstream: some return a raw JSON array, others a
//! paginated envelope `{content, totalElements, ...}`. [`ListPayload`] absorbs both
//! shapes once, here at the boundary, so callers always work with a [`Page`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The wrapping object around every backend response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A normalized page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub page: u32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            page: 0,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The two list shapes the backend emits, normalized via [`ListPayload::into_page`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged {
        content: Vec<T>,
        #[serde(rename = "totalElements", default)]
        total_elements: u64,
        #[serde(rename = "totalPages", default)]
        total_pages: u32,
        #[serde(rename = "number", default)]
        page: u32,
    },
    Raw(Vec<T>),
    /// A handful of endpoints return a single bare object instead of a list.
    One(T),
}

impl<T> ListPayload<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            ListPayload::Paged {
                content,
                total_elements,
                total_pages,
                page,
            } => Page {
                items: content,
                total_elements,
                total_pages,
                page,
            },
            ListPayload::Raw(items) => {
                let total = items.len() as u64;
                Page {
                    items,
                    total_elements: total,
                    total_pages: 1,
                    page: 0,
                }
            }
            ListPayload::One(item) => Page {
                items: vec![item],
                total_elements: 1,
                total_pages: 1,
                page: 0,
            },
        }
    }
}

#[cfg(feature = "server")]
pub use client::{Backend, BackendError};

#[cfg(feature = "server")]
mod client {
    use super::{ApiEnvelope, ListPayload, Page};
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    /// Errors from a backend call.
    #[derive(Debug, thiserror::Error)]
    pub enum BackendError {
        #[error("request failed: {0}")]
        Http(#[from] reqwest::Error),
        /// The backend answered with `success: false`.
        #[error("{message}")]
        Api { code: Option<i64>, message: String },
        #[error("backend response carried no data")]
        MissingData,
    }

    /// Thin client over the backend REST API. One in-repo call maps to one
    /// HTTP request; no retry, no caching, no in-flight deduplication.
    #[derive(Debug, Clone)]
    pub struct Backend {
        http: reqwest::Client,
        base_url: String,
        bearer: Option<String>,
    }

    impl Backend {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                base_url: base_url.into(),
                bearer: None,
            }
        }

        /// Attach a bearer token for authenticated endpoints.
        pub fn with_token(mut self, token: Option<String>) -> Self {
            self.bearer = token.filter(|t| !t.is_empty());
            self
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
            match &self.bearer {
                Some(token) => req.bearer_auth(token),
                None => req,
            }
        }

        async fn send<T: DeserializeOwned>(
            &self,
            req: reqwest::RequestBuilder,
        ) -> Result<T, BackendError> {
            let envelope: ApiEnvelope<T> = self.apply_auth(req).send().await?.json().await?;
            unwrap_envelope(envelope)
        }

        pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
            self.send(self.http.get(self.url(path))).await
        }

        pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
            &self,
            path: &str,
            body: &B,
        ) -> Result<T, BackendError> {
            self.send(self.http.post(self.url(path)).json(body)).await
        }

        pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
            &self,
            path: &str,
            body: &B,
        ) -> Result<T, BackendError> {
            self.send(self.http.put(self.url(path)).json(body)).await
        }

        pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
            self.send(self.http.delete(self.url(path))).await
        }

        /// POST where the backend acknowledges with `data: null`.
        pub async fn post_empty<B: Serialize + ?Sized>(
            &self,
            path: &str,
            body: &B,
        ) -> Result<(), BackendError> {
            self.send_ack(self.http.post(self.url(path)).json(body)).await
        }

        /// DELETE; the backend acknowledges with `data: null`.
        pub async fn delete_empty(&self, path: &str) -> Result<(), BackendError> {
            self.send_ack(self.http.delete(self.url(path))).await
        }

        /// Like [`send`](Self::send) but only checks the envelope's success
        /// flag; the payload, if any, is discarded.
        async fn send_ack(&self, req: reqwest::RequestBuilder) -> Result<(), BackendError> {
            let envelope: ApiEnvelope<serde_json::Value> =
                self.apply_auth(req).send().await?.json().await?;
            if !envelope.success {
                return Err(BackendError::Api {
                    code: envelope.code,
                    message: envelope
                        .message
                        .unwrap_or_else(|| "request rejected by backend".to_string()),
                });
            }
            Ok(())
        }

        /// GET a list endpoint, normalizing whatever shape it returns.
        pub async fn get_page<T: DeserializeOwned>(
            &self,
            path: &str,
        ) -> Result<Page<T>, BackendError> {
            let payload: ListPayload<T> = self.get(path).await?;
            Ok(payload.into_page())
        }
    }

    /// Unwrap the `{success, data, message}` envelope into its payload.
    pub(super) fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, BackendError> {
        if !envelope.success {
            return Err(BackendError::Api {
                code: envelope.code,
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected by backend".to_string()),
            });
        }
        envelope.data.ok_or(BackendError::MissingData)
    }
}

/// Build a query string for searched, paginated list endpoints.
pub fn list_query(search: &str, page: u32, size: u32) -> String {
    let mut query = format!("?page={page}&size={size}");
    let search = search.trim();
    if !search.is_empty() {
        query.push_str("&search=");
        // Percent-encode the minimum a search box can produce.
        for c in search.chars() {
            match c {
                ' ' => query.push_str("%20"),
                '&' => query.push_str("%26"),
                '#' => query.push_str("%23"),
                '%' => query.push_str("%25"),
                '+' => query.push_str("%2B"),
                '=' => query.push_str("%3D"),
                c => query.push(c),
            }
        }
    }
    query
}

pub fn parse_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Page<T>, String> {
    let payload: ListPayload<T> = serde_json::from_value(value).map_err(|e| e.to_string())?;
    Ok(payload.into_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_raw_array_normalizes() {
        let page: Page<Item> =
            parse_list(json!([{"id": "a"}, {"id": "b"}])).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
    }

    #[test]
    fn test_paged_envelope_normalizes() {
        let page: Page<Item> = parse_list(json!({
            "content": [{"id": "a"}, {"id": "b"}],
            "totalElements": 17,
            "totalPages": 9,
            "number": 3
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_elements, 17);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_both_shapes_agree_on_items() {
        let raw: Page<Item> = parse_list(json!([{"id": "x"}])).unwrap();
        let paged: Page<Item> =
            parse_list(json!({"content": [{"id": "x"}], "totalElements": 1, "totalPages": 1, "number": 0}))
                .unwrap();
        assert_eq!(raw.items, paged.items);
        assert_eq!(raw.total_elements, paged.total_elements);
    }

    #[test]
    fn test_bare_object_becomes_single_item_page() {
        let page: Page<Item> = parse_list(json!({"id": "only"})).unwrap();
        assert_eq!(page.items, vec![Item { id: "only".into() }]);
        assert_eq!(page.total_elements, 1);
    }

    #[test]
    fn test_list_query_encodes_search() {
        assert_eq!(list_query("", 0, 10), "?page=0&size=10");
        assert_eq!(
            list_query("green tea", 2, 20),
            "?page=2&size=20&search=green%20tea"
        );
        assert_eq!(list_query("a&b", 0, 5), "?page=0&size=5&search=a%26b");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope: ApiEnvelope<Item> = serde_json::from_value(json!({
            "success": false,
            "code": 404,
            "message": "ingredient not found",
            "data": null,
            "timestamp": "2025-05-01T12:00:00Z"
        }))
        .unwrap();
        let err = super::client::unwrap_envelope(envelope).unwrap_err();
        assert_eq!(err.to_string(), "ingredient not found");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_envelope_success_without_data_is_error() {
        let envelope: ApiEnvelope<Item> = serde_json::from_value(json!({
            "success": true,
            "data": null
        }))
        .unwrap();
        assert!(matches!(
            super::client::unwrap_envelope(envelope),
            Err(super::client::BackendError::MissingData)
        ));
    }
}

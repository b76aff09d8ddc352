//! Content source contracts and adapters.
//!
//! Hosted apps treat the JSON endpoints as an external read-only data
//! source. A fetch failure is recoverable by design: callers map any
//! [`ContentError`] to an empty item set and move on.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use futures::future::LocalBoxFuture;
use serde_json::Value;
use thiserror::Error;

/// Boxed local future used by [`ContentSource`] async methods.
pub type ContentFuture<T> = LocalBoxFuture<'static, T>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by a content fetch before it reaches an app.
pub enum ContentError {
    /// The host environment cannot perform fetches (non-browser target).
    #[error("content source unavailable: {0}")]
    Unavailable(String),
    /// The endpoint answered with a non-success status code.
    #[error("endpoint returned status {0}")]
    Status(u16),
    /// The response body was not the JSON shape the caller expected.
    #[error("invalid payload: {0}")]
    Decode(String),
}

/// Read-only JSON endpoint access injected into hosted apps.
pub trait ContentSource {
    /// Fetches `url` and decodes the body as a JSON document.
    fn fetch_json(&self, url: &str) -> ContentFuture<Result<Value, ContentError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser adapter backed by the page `fetch` API.
pub struct WebContentSource;

impl ContentSource for WebContentSource {
    fn fetch_json(&self, url: &str) -> ContentFuture<Result<Value, ContentError>> {
        let url = url.to_string();
        Box::pin(async move { fetch_json_text(&url).await })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json_text(url: &str) -> Result<Value, ContentError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window()
        .ok_or_else(|| ContentError::Unavailable("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| ContentError::Decode("fetch did not produce a Response".to_string()))?;
    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| ContentError::Decode("response body was not text".to_string()))?;
    serde_json::from_str(&text).map_err(|err| ContentError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> ContentError {
    let text = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown fetch error".to_string());
    ContentError::Unavailable(text)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_json_text(url: &str) -> Result<Value, ContentError> {
    Err(ContentError::Unavailable(format!(
        "fetch is only wired up on wasm32 (requested {url})"
    )))
}

#[derive(Debug, Clone, Default)]
/// In-memory adapter keyed by URL, used by tests and non-browser targets.
pub struct StaticContentSource {
    inner: Rc<RefCell<HashMap<String, Value>>>,
}

impl StaticContentSource {
    /// Registers a canned JSON document for `url`.
    pub fn insert(&self, url: impl Into<String>, value: Value) {
        self.inner.borrow_mut().insert(url.into(), value);
    }
}

impl ContentSource for StaticContentSource {
    fn fetch_json(&self, url: &str) -> ContentFuture<Result<Value, ContentError>> {
        let found = self.inner.borrow().get(url).cloned();
        Box::pin(async move { found.ok_or(ContentError::Status(404)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn static_source_returns_registered_documents() {
        let source = StaticContentSource::default();
        source.insert("/api/blogs.json", json!({ "items": [] }));

        let fetched = futures::executor::block_on(source.fetch_json("/api/blogs.json"));
        assert_eq!(fetched, Ok(json!({ "items": [] })));
    }

    #[test]
    fn static_source_misses_report_a_status_error() {
        let source = StaticContentSource::default();
        let fetched = futures::executor::block_on(source.fetch_json("/api/missing.json"));
        assert_eq!(fetched, Err(ContentError::Status(404)));
    }
}

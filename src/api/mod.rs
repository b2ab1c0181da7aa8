//! Item API
//!
//! Frontend bindings to the backend item endpoints.

mod http;
#[cfg(any(test, feature = "stub"))]
mod stub;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Item, ItemId};

pub use http::{decode_confirmation, decode_envelope, status_error, HttpItemsApi};
#[cfg(any(test, feature = "stub"))]
pub use stub::{ApiCall, StubItemsApi};

/// Backend operations used by the main view.
///
/// Futures are `?Send`: browser fetch futures live on the UI thread.
#[async_trait(?Send)]
pub trait ItemsApi: Send + Sync {
    /// GET `{base}/item/items`
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// POST `{base}/item/items` with `{ "name": name }`; returns the stored item
    async fn create_item(&self, name: &str) -> ApiResult<Item>;

    /// DELETE `{base}/item/items/{id}`; returns the backend's confirmation payload
    async fn delete_item(&self, id: &ItemId) -> ApiResult<serde_json::Value>;
}

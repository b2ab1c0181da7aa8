//! HTTP client for the item endpoints (browser fetch via gloo-net).
//! Stateless: no retries, no caching.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::ItemsApi;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Envelope, Item, ItemId, NewItem};

#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    config: AppConfig,
}

impl HttpItemsApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let url = self.config.items_endpoint();
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = read_body(response).await?;
        decode_envelope(&body)
    }

    async fn create_item(&self, name: &str) -> ApiResult<Item> {
        let url = self.config.items_endpoint();
        log::debug!("[API] POST {} name={:?}", url, name);
        let response = Request::post(&url)
            .json(&NewItem { name })
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = read_body(response).await?;
        decode_envelope(&body)
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<serde_json::Value> {
        let url = self.config.item_endpoint(id);
        log::debug!("[API] DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = read_body(response).await?;
        decode_confirmation(&body)
    }
}

/// Read the body of a 2xx response, or turn the status into an error.
async fn read_body(response: Response) -> ApiResult<String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(response.status(), &response.status_text(), &body));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Error for a non-2xx response: the body when there is one, else the status text.
pub fn status_error(status: u16, status_text: &str, body: &str) -> ApiError {
    let body = body.trim();
    let message = if body.is_empty() { status_text } else { body };
    ApiError::Status { status, message: message.to_string() }
}

/// Decode `{ "data": T }` and unwrap the payload.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Delete confirmations carry any JSON in `data`; an empty body also counts.
pub fn decode_confirmation(body: &str) -> ApiResult<serde_json::Value> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    decode_envelope(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_item_list() {
        let items: Vec<Item> =
            decode_envelope(r#"{"data":[{"id":1,"name":"Mocked Item"},{"id":4,"name":"Cake"}]}"#)
                .unwrap();
        assert_eq!(
            items,
            vec![Item::new(ItemId::Number(1), "Mocked Item"), Item::new(ItemId::Number(4), "Cake")]
        );
    }

    #[test]
    fn test_decode_created_item() {
        let item: Item = decode_envelope(r#"{"data":{"id":2,"name":"Newly Added Item"}}"#).unwrap();
        assert_eq!(item, Item::new(ItemId::Number(2), "Newly Added Item"));
    }

    #[test]
    fn test_decode_missing_data_field() {
        let result = decode_envelope::<Vec<Item>>(r#"[{"id":1,"name":"bare array"}]"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_not_json() {
        let result = decode_envelope::<Vec<Item>>("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_confirmation() {
        assert_eq!(
            decode_confirmation(r#"{"data":"Mocked delete item data"}"#).unwrap(),
            json!("Mocked delete item data")
        );
        assert_eq!(decode_confirmation(r#"{"data":{"deleted":1}}"#).unwrap(), json!({"deleted": 1}));
        assert_eq!(decode_confirmation("  ").unwrap(), serde_json::Value::Null);
        assert!(decode_confirmation("ok").is_err());
    }

    #[test]
    fn test_status_error_empty_body_uses_status_text() {
        assert_eq!(
            status_error(500, "Internal Server Error", ""),
            ApiError::Status { status: 500, message: "Internal Server Error".into() }
        );
        assert_eq!(
            status_error(502, "Bad Gateway", " \n"),
            ApiError::Status { status: 502, message: "Bad Gateway".into() }
        );
    }

    #[test]
    fn test_status_error_prefers_body() {
        let err = status_error(404, "Not Found", "{\"error\":\"item 7 not found\"}\n");
        assert_eq!(
            err,
            ApiError::Status { status: 404, message: "{\"error\":\"item 7 not found\"}".into() }
        );
        assert_eq!(err.to_string(), "HTTP 404: {\"error\":\"item 7 not found\"}");
    }
}

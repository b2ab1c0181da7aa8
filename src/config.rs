//! App Configuration
//!
//! Backend location, resolved at build time and injected through context.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::ItemId;

/// Backend base URL baked in at compile time.
/// - Development: http://localhost:3000 (default)
/// - Otherwise: `BACKEND_URL` (or `VITE_BACKEND_URL` in `.env`, see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Path of the item collection on the backend
pub const ITEMS_PATH: &str = "/item/items";

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let mut backend_url = backend_url.into().trim().to_string();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self { backend_url }
    }

    /// Config from the compile-time environment
    pub fn from_env() -> Self {
        Self::new(BACKEND_URL)
    }

    /// `{base}/item/items`
    pub fn items_endpoint(&self) -> String {
        format!("{}{}", self.backend_url, ITEMS_PATH)
    }

    /// `{base}/item/items/{id}`, id escaped as one path segment
    pub fn item_endpoint(&self, id: &ItemId) -> String {
        let segment = id.to_string();
        format!(
            "{}{}/{}",
            self.backend_url,
            ITEMS_PATH,
            utf8_percent_encode(&segment, PATH_SEGMENT)
        )
    }
}

//! In-process stand-in for the backend, for tests (`stub` feature).
//!
//! Answers with scripted responses and records every call.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::ItemsApi;
use crate::error::ApiResult;
use crate::models::{Item, ItemId};

/// A call the stub received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(String),
    Delete(ItemId),
}

#[derive(Debug)]
struct Script {
    list: ApiResult<Vec<Item>>,
    /// None = echo the name back with the next numeric id
    create: Option<ApiResult<Item>>,
    delete: ApiResult<Value>,
    next_id: u64,
    calls: Vec<ApiCall>,
}

#[derive(Debug)]
pub struct StubItemsApi {
    script: Mutex<Script>,
}

impl Default for StubItemsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl StubItemsApi {
    /// Empty list, echoing create, confirming delete
    pub fn new() -> Self {
        Self {
            script: Mutex::new(Script {
                list: Ok(Vec::new()),
                create: None,
                delete: Ok(Value::String("deleted".into())),
                next_id: 1,
                calls: Vec::new(),
            }),
        }
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        {
            let mut script = self.lock();
            script.next_id = items
                .iter()
                .filter_map(|item| match item.id {
                    ItemId::Number(n) => Some(n + 1),
                    ItemId::Text(_) => None,
                })
                .max()
                .unwrap_or(1);
            script.list = Ok(items);
        }
        self
    }

    pub fn on_list(self, response: ApiResult<Vec<Item>>) -> Self {
        self.lock().list = response;
        self
    }

    pub fn on_create(self, response: ApiResult<Item>) -> Self {
        self.lock().create = Some(response);
        self
    }

    pub fn on_delete(self, response: ApiResult<Value>) -> Self {
        self.lock().delete = response;
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait(?Send)]
impl ItemsApi for StubItemsApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let mut script = self.lock();
        script.calls.push(ApiCall::List);
        script.list.clone()
    }

    async fn create_item(&self, name: &str) -> ApiResult<Item> {
        let mut script = self.lock();
        script.calls.push(ApiCall::Create(name.to_string()));
        match script.create.clone() {
            Some(response) => response,
            None => {
                let id = script.next_id;
                script.next_id += 1;
                Ok(Item::new(ItemId::Number(id), name))
            }
        }
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<Value> {
        let mut script = self.lock();
        script.calls.push(ApiCall::Delete(id.clone()));
        script.delete.clone()
    }
}

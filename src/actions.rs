//! Main View Actions
//!
//! The load/add/delete operations of the main page. Each one issues at most a
//! single backend call, then applies the outcome to the view state. Failures
//! become the error notice; nothing is retried.

use leptos::prelude::{Update, WithUntracked};

use crate::api::ItemsApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemId};
use crate::store::PlannerState;

/// Anything the actions can read and mutate planner state through
/// (the view's `Store`, or a plain signal).
pub trait PlannerStateHandle:
    Update<Value = PlannerState> + WithUntracked<Value = PlannerState>
{
}

impl<T> PlannerStateHandle for T where
    T: Update<Value = PlannerState> + WithUntracked<Value = PlannerState>
{
}

/// Fetch all items and replace the local sequence.
/// On failure the previous sequence is kept.
pub async fn load_items(api: &dyn ItemsApi, state: &impl PlannerStateHandle) -> ApiResult<()> {
    state.update(|s| s.loading = true);
    let result = api.list_items().await;
    match result {
        Ok(items) => {
            log::info!("[MAIN] Loaded {} items", items.len());
            state.update(|s| {
                s.replace_items(items);
                s.clear_error();
                s.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            log::error!("[MAIN] Failed to load items: {}", err);
            state.update(|s| {
                s.set_error(&err);
                s.loading = false;
            });
            Err(err)
        }
    }
}

/// Create an item and append what the backend stored.
/// Empty names are rejected without a request.
pub async fn add_item(
    api: &dyn ItemsApi,
    state: &impl PlannerStateHandle,
    name: &str,
) -> ApiResult<Item> {
    let name = name.trim();
    if name.is_empty() {
        let err = ApiError::EmptyName;
        log::warn!("[MAIN] Rejected item: {}", err);
        state.update(|s| s.set_error(&err));
        return Err(err);
    }

    match api.create_item(name).await {
        Ok(item) => {
            log::info!("[MAIN] Added item #{} {:?}", item.id, item.name);
            state.update(|s| {
                s.push_item(item.clone());
                s.clear_error();
            });
            Ok(item)
        }
        Err(err) => {
            log::error!("[MAIN] Failed to add item {:?}: {}", name, err);
            state.update(|s| s.set_error(&err));
            Err(err)
        }
    }
}

/// Delete an item by id. Returns whether an item was removed;
/// ids not present locally are a no-op.
pub async fn delete_item(
    api: &dyn ItemsApi,
    state: &impl PlannerStateHandle,
    id: &ItemId,
) -> ApiResult<bool> {
    if !state.with_untracked(|s| s.contains(id)) {
        log::debug!("[MAIN] Item #{} not in list, nothing to delete", id);
        return Ok(false);
    }

    match api.delete_item(id).await {
        Ok(confirmation) => {
            log::info!("[MAIN] Deleted item #{} ({})", id, confirmation);
            let mut removed = false;
            state.update(|s| {
                removed = s.remove_item(id);
                s.clear_error();
            });
            Ok(removed)
        }
        Err(err) => {
            log::error!("[MAIN] Failed to delete item #{}: {}", id, err);
            state.update(|s| s.set_error(&err));
            Err(err)
        }
    }
}

pub fn dismiss_error(state: &impl PlannerStateHandle) {
    state.update(|s| s.clear_error());
}

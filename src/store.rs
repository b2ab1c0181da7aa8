//! Planner State Store
//!
//! View-local state of the main page. Uses Leptos reactive_stores for
//! fine-grained reactivity; one store per mounted view.

use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{Item, ItemId};

/// State owned by the main view while it is mounted
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PlannerState {
    /// Items in backend order; ids are unique
    pub items: Vec<Item>,
    /// List fetch in flight
    pub loading: bool,
    /// User-visible error notice (latest failure)
    pub error: Option<String>,
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

impl PlannerState {
    /// Replace the whole sequence (initial fetch)
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Append a created item. An item whose id is already present replaces it in place.
    pub fn push_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Remove the item with `id`; false when it was not there
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn set_error(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

//! UI Components
//!
//! Leptos components of the planner page.

mod main_page;
mod new_item_form;
mod item_row;
mod error_notice;
mod not_found;

pub use main_page::{MainPage, CONTAINER_CLASS, TITLE};
pub use new_item_form::NewItemForm;
pub use item_row::ItemRow;
pub use error_notice::ErrorNotice;
pub use not_found::NotFound;

//! Emre's Birthday Planner
//!
//! Single page front end: one route, one view listing items from the backend,
//! with add and delete.

pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod router;
pub mod store;

pub use app::App;
pub use config::AppConfig;
pub use context::AppContext;

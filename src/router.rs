//! Router
//!
//! Route table: `/` (mainPage) renders the planner, anything else falls back
//! to Not Found. Matching and browser history are leptos_router's.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{MainPage, NotFound};

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                // mainPage
                <Route path=path!("/") view=MainPage />
            </Routes>
        </Router>
    }
}

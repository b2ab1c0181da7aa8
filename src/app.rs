//! Birthday Planner App
//!
//! Root component: provides the app context and mounts the router.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::AppRouter;

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_context(ctx);

    view! { <AppRouter /> }
}

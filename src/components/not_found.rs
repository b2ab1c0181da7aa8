use leptos::prelude::*;

/// Fallback for paths with no route
#[component]
pub fn NotFound() -> impl IntoView {
    view! { <p class="not-found">"Not Found"</p> }
}

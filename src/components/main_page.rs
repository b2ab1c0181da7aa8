//! Main Page
//!
//! The planner screen: title, add form, item list, error notice.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{ErrorNotice, ItemRow, NewItemForm};
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{PlannerState, PlannerStateStoreFields};

/// Class on the page root
pub const CONTAINER_CLASS: &str = "container";
pub const TITLE: &str = "Emre's Birthday Planner";

#[component]
pub fn MainPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = Store::new(PlannerState::default());

    // Load items once on mount
    Effect::new(move |_| {
        let api = ctx.api.clone();
        spawn_local(async move {
            let _ = actions::load_items(api.as_ref(), &store).await;
        });
    });

    let is_empty = move || !store.loading().get() && store.items().read().is_empty();

    view! {
        <div class=CONTAINER_CLASS>
            <h1 class="title">{TITLE}</h1>

            <ErrorNotice store=store />

            <NewItemForm store=store />

            <Show when=move || store.loading().get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=is_empty>
                <p class="empty">"Nothing planned yet."</p>
            </Show>

            <ul class="item-list">
                <For
                    each=move || store.items().get()
                    key=|item: &Item| (item.id.clone(), item.name.clone())
                    children=move |item: Item| view! { <ItemRow item=item store=store /> }
                />
            </ul>

            <p class="item-count">{move || format!("{} items", store.items().read().len())}</p>
        </div>
    }
}

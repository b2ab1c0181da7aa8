//! Item Row Component
//!
//! Single entry in the item list, with inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::AppContext;
use crate::models::Item;
use crate::store::PlannerStore;

/// Row for one item. × asks `Delete "<name>"?`; ✓ sends one DELETE and
/// ignores further confirms until the backend answered.
#[component]
pub fn ItemRow(item: Item, store: PlannerStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (confirming, set_confirming) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let id = item.id.clone();
    let prompt = format!("Delete \"{}\"?", item.name);

    let confirm_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let api = ctx.api.clone();
        let id = id.clone();
        spawn_local(async move {
            // On success the row is gone; on failure it stays and can be retried
            if actions::delete_item(api.as_ref(), &store, &id).await.is_err() {
                set_deleting.set(false);
                set_confirming.set(false);
            }
        });
    };

    view! {
        <li class="item" data-id=item.id.to_string()>
            <span class="item-name">{item.name.clone()}</span>
            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <button
                        class="delete-btn"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            >
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        disabled=move || deleting.get()
                        on:click=confirm_delete.clone()
                    >
                        {move || if deleting.get() { "…" } else { "✓" }}
                    </button>
                    <button
                        class="cancel-btn"
                        disabled=move || deleting.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </li>
    }
}

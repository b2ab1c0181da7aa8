//! New Item Form Component
//!
//! Text input plus submit button for adding an item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::AppContext;
use crate::store::PlannerStore;

/// Form for creating new items. Input clears only after the backend stored the item.
#[component]
pub fn NewItemForm(store: PlannerStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_name, set_new_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name = new_name.get_untracked();
        let api = ctx.api.clone();
        set_submitting.set(true);

        spawn_local(async move {
            if actions::add_item(api.as_ref(), &store, &name).await.is_ok() {
                set_new_name.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    name="name"
                    placeholder="Add new item..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>"Add"</button>
            </div>
        </form>
    }
}

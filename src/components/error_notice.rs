//! Error notice shown above the list until dismissed or the next success.

use leptos::prelude::*;

use crate::actions;
use crate::store::{PlannerStateStoreFields, PlannerStore};

#[component]
pub fn ErrorNotice(store: PlannerStore) -> impl IntoView {
    move || {
        store.error().get().map(|message| {
            view! {
                <div class="error-notice" role="alert">
                    <span class="error-text">{message}</span>
                    <button class="dismiss-btn" title="Dismiss" on:click=move |_| actions::dismiss_error(&store)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

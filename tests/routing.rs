//! Routing browser tests
//!
//! Mounts the whole app at a given browser path.
//! Run with `wasm-pack test --headless --firefox --features stub`.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use birthday_planner::api::StubItemsApi;
use birthday_planner::components::TITLE;
use birthday_planner::{App, AppConfig, AppContext};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Point the browser at `path`, then mount the app into a fresh host element.
fn mount_at(path: &str) -> Element {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();

    let document = window.document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let ctx = AppContext::new(AppConfig::new("http://backend.test"), Arc::new(StubItemsApi::new()));
    let parent: HtmlElement = host.clone().unchecked_into();
    let handle = leptos::mount::mount_to(parent, move || view! { <App ctx=ctx /> });
    std::mem::forget(handle);

    host
}

async fn settle() {
    for _ in 0..3 {
        TimeoutFuture::new(10).await;
    }
}

#[wasm_bindgen_test]
async fn root_path_renders_main_page() {
    let host = mount_at("/");
    settle().await;

    let title = host.query_selector(".container .title").unwrap();
    assert_eq!(title.unwrap().text_content().unwrap(), TITLE);
    assert!(host.query_selector(".not-found").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn unknown_path_renders_not_found() {
    let host = mount_at("/birthdays/unknown");
    settle().await;

    assert!(host.query_selector(".container").unwrap().is_none());
    let fallback = host.query_selector(".not-found").unwrap().unwrap();
    assert_eq!(fallback.text_content().unwrap(), "Not Found");
}

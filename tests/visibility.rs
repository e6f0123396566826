// One-shot visibility trigger and the reveal wrapper built on it.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use yew::prelude::*;

use portfolio::components::reveal::Reveal;
use portfolio::visibility::use_in_view_once;
use support::{cleanup, create_mount_point, query};

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(DetachedWatcher)]
fn detached_watcher() -> Html {
    // Never bound to an element, so there is nothing to observe.
    let node = use_node_ref();
    let seen = use_in_view_once(node, 0.3);
    html! {
        <p id="seen">{ seen.to_string() }</p>
    }
}

#[wasm_bindgen_test]
async fn unobservable_node_counts_as_seen() {
    let mount = create_mount_point();
    let app = yew::Renderer::<DetachedWatcher>::with_root(mount.clone()).render();
    TimeoutFuture::new(50).await;

    assert_eq!(query(&mount, "#seen").text_content().unwrap(), "true");

    app.destroy();
    cleanup(&mount);
}

#[function_component(TallReveal)]
fn tall_reveal() -> Html {
    html! {
        <Reveal class="tall">
            <div style="height: 10000px;">{"tall"}</div>
        </Reveal>
    }
}

#[wasm_bindgen_test]
async fn reveal_taller_than_viewport_still_appears() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    let mount = create_mount_point();
    let app = yew::Renderer::<TallReveal>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;
    query(&mount, ".tall").scroll_into_view();
    TimeoutFuture::new(200).await;

    assert!(query(&mount, ".tall").class_list().contains("revealed"));

    app.destroy();
    cleanup(&mount);
}

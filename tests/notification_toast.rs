// Toast lifecycle: auto-hide, manual close and replacement.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use yew::prelude::*;

use portfolio::components::notification::NotificationToast;
use portfolio::config::NOTIFICATION_TIMEOUT_MS;
use portfolio::notification::{use_notification, NotificationKind};
use support::{cleanup, click, create_mount_point, text_of};

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Harness)]
fn harness() -> Html {
    let notification = use_notification();
    let show = |label: &'static str, kind: NotificationKind| {
        let notification = notification.clone();
        Callback::from(move |_: MouseEvent| notification.show(kind, label))
    };
    let close = {
        let notification = notification.clone();
        Callback::from(move |_: ()| notification.dismiss())
    };
    html! {
        <>
            <button id="show-first" onclick={show("first", NotificationKind::Success)} />
            <button id="show-second" onclick={show("second", NotificationKind::Error)} />
            <NotificationToast state={notification.state().clone()} on_close={close} />
        </>
    }
}

fn toast_visible(mount: &web_sys::Element) -> bool {
    mount.query_selector(".toast").unwrap().is_some()
}

#[wasm_bindgen_test]
async fn toast_hides_itself_after_timeout() {
    let mount = create_mount_point();
    yew::Renderer::<Harness>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;
    assert!(!toast_visible(&mount));

    click(&mount, "#show-first");
    TimeoutFuture::new(0).await;
    assert_eq!(text_of(&mount, ".toast-message"), "first");

    TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS + 200).await;
    assert!(!toast_visible(&mount));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn close_button_hides_immediately() {
    let mount = create_mount_point();
    yew::Renderer::<Harness>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;

    click(&mount, "#show-first");
    TimeoutFuture::new(0).await;
    click(&mount, ".toast-close");
    TimeoutFuture::new(0).await;
    assert!(!toast_visible(&mount));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn newer_toast_replaces_and_restarts_timer() {
    let mount = create_mount_point();
    yew::Renderer::<Harness>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;

    click(&mount, "#show-first");
    TimeoutFuture::new(3000).await;
    click(&mount, "#show-second");
    TimeoutFuture::new(0).await;
    assert_eq!(text_of(&mount, ".toast-message"), "second");

    // The first toast's deadline passes without hiding the second one.
    TimeoutFuture::new(2500).await;
    assert!(toast_visible(&mount));
    assert_eq!(text_of(&mount, ".toast-message"), "second");

    TimeoutFuture::new(3000).await;
    assert!(!toast_visible(&mount));

    cleanup(&mount);
}

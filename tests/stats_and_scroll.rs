// Stat counters and scroll tracking, driven by real scrolling.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::Element;

use portfolio::pages::portfolio::Portfolio;
use support::{cleanup, click, control_value, create_mount_point, fill, query};

wasm_bindgen_test_configure!(run_in_browser);

const FINAL_LABELS: [&str; 4] = ["50,000+", "105", "846", "21,095+"];
const START_LABELS: [&str; 4] = ["0+", "0", "0", "0+"];

fn labels(mount: &Element) -> Vec<String> {
    let values = mount.query_selector_all(".stat-value").unwrap();
    (0..values.length())
        .filter_map(|i| values.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn scroll_to_top() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}

fn scrollable_height() -> f64 {
    let window = gloo_utils::window();
    let height = gloo_utils::document()
        .document_element()
        .unwrap()
        .scroll_height() as f64;
    height - window.inner_height().unwrap().as_f64().unwrap()
}

#[wasm_bindgen_test]
async fn counters_finish_on_exact_labels_once_seen() {
    scroll_to_top();
    let mount = create_mount_point();
    let app = yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(100).await;

    // Below the fold: nothing has started.
    assert_eq!(labels(&mount), START_LABELS);

    query(&mount, "#stats").scroll_into_view();
    TimeoutFuture::new(2500).await;
    assert_eq!(labels(&mount), FINAL_LABELS);

    app.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn counters_do_not_restart_when_stats_reenter_view() {
    scroll_to_top();
    let mount = create_mount_point();
    let app = yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(100).await;

    query(&mount, "#stats").scroll_into_view();
    TimeoutFuture::new(2500).await;
    assert_eq!(labels(&mount), FINAL_LABELS);

    scroll_to_top();
    TimeoutFuture::new(300).await;
    query(&mount, "#stats").scroll_into_view();

    // A restarted animation would be showing small values by now.
    TimeoutFuture::new(200).await;
    assert_eq!(labels(&mount), FINAL_LABELS);
    TimeoutFuture::new(2300).await;
    assert_eq!(labels(&mount), FINAL_LABELS);

    app.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unmounting_mid_animation_stops_the_counters() {
    scroll_to_top();
    let mount = create_mount_point();
    let app = yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(100).await;

    query(&mount, "#stats").scroll_into_view();
    TimeoutFuture::new(500).await;
    let midway = labels(&mount);
    assert_ne!(midway[0], START_LABELS[0], "counters never started");
    assert_ne!(midway[0], FINAL_LABELS[0], "counters finished too early");

    app.destroy();
    TimeoutFuture::new(0).await;
    assert_eq!(mount.child_element_count(), 0);

    // Any interval left running would dispatch into the destroyed component here.
    TimeoutFuture::new(2000).await;
    assert_eq!(mount.child_element_count(), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn progress_bar_follows_scroll_position() {
    scroll_to_top();
    let mount = create_mount_point();
    let app = yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(100).await;

    let reported = |mount: &Element| -> f64 {
        query(mount, ".progress-bar")
            .get_attribute("aria-valuenow")
            .unwrap()
            .parse()
            .unwrap()
    };
    assert_eq!(reported(&mount), 0.0);

    let scrollable = scrollable_height();
    assert!(scrollable > 0.0, "page does not scroll");
    gloo_utils::window().scroll_to_with_x_and_y(0.0, scrollable / 2.0);
    TimeoutFuture::new(200).await;
    assert!((reported(&mount) - 50.0).abs() <= 1.0, "reported {}", reported(&mount));

    gloo_utils::window().scroll_to_with_x_and_y(0.0, scrollable);
    TimeoutFuture::new(200).await;
    assert!((reported(&mount) - 100.0).abs() <= 1.0);

    app.destroy();
    cleanup(&mount);
    scroll_to_top();
}

#[wasm_bindgen_test]
async fn scrolling_keeps_menu_and_form_state() {
    scroll_to_top();
    let mount = create_mount_point();
    let app = yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(100).await;

    click(&mount, ".burger-menu");
    fill(&mount, "fullName", "Asha Rao");
    TimeoutFuture::new(0).await;

    let scrollable = scrollable_height();
    for step in 1..=5 {
        gloo_utils::window().scroll_to_with_x_and_y(0.0, scrollable * step as f64 / 10.0);
        TimeoutFuture::new(50).await;
    }

    assert!(query(&mount, ".mobile-menu").class_list().contains("open"));
    assert_eq!(control_value(&mount, "fullName"), "Asha Rao");

    app.destroy();
    cleanup(&mount);
    scroll_to_top();
}

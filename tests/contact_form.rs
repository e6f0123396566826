// Contact form flow against the simulated delivery target.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use portfolio::config::{SIMULATED_SUBMIT_DELAY_MS, SUBMIT_SUCCESS_MESSAGE};
use portfolio::pages::portfolio::Portfolio;
use support::{
    choose, cleanup, click, control_value, create_mount_point, fill, query, submit, text_of,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fill_required(mount: &web_sys::Element) {
    fill(mount, "fullName", "Asha Rao");
    fill(mount, "email", "asha@example.com");
    fill(mount, "location", "Pune, India");
    fill(mount, "challenge", "My posts get no reach");
    choose(mount, "contactMethod", "whatsapp");
}

#[wasm_bindgen_test]
async fn submit_shows_success_and_clears_form() {
    let mount = create_mount_point();
    yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;

    fill_required(&mount);
    fill(&mount, "message", "Looking forward to it");
    choose(&mount, "hearAbout", "linkedin");
    TimeoutFuture::new(0).await;
    assert_eq!(control_value(&mount, "fullName"), "Asha Rao");

    click(&mount, ".submit-button");
    TimeoutFuture::new(50).await;

    assert_eq!(text_of(&mount, ".submit-button"), "Sending...");
    assert!(query(&mount, ".submit-button").has_attribute("disabled"));
    assert!(mount.query_selector(".toast").unwrap().is_none());

    TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS + 300).await;

    assert_eq!(text_of(&mount, ".toast-message"), SUBMIT_SUCCESS_MESSAGE);
    assert!(query(&mount, ".toast").class_list().contains("toast-success"));
    for name in ["fullName", "email", "location", "challenge", "contactMethod", "hearAbout", "message"] {
        assert_eq!(control_value(&mount, name), "", "{name} was not cleared");
    }
    assert!(!query(&mount, ".submit-button").has_attribute("disabled"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn incomplete_form_is_not_sent() {
    let mount = create_mount_point();
    yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;

    fill(&mount, "fullName", "Asha Rao");
    fill(&mount, "location", "   ");
    TimeoutFuture::new(0).await;

    // Dispatched on the form itself, so the handler's own required-field check decides.
    let not_prevented = submit(&mount, ".contact-form");
    assert!(!not_prevented, "submit handler did not run");
    TimeoutFuture::new(50).await;

    assert!(!text_of(&mount, ".submit-button").contains("Sending"));
    assert!(!query(&mount, ".submit-button").has_attribute("disabled"));
    assert_eq!(control_value(&mount, "fullName"), "Asha Rao");

    TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS + 300).await;
    assert!(mount.query_selector(".toast").unwrap().is_none());
    assert_eq!(control_value(&mount, "fullName"), "Asha Rao");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn complete_form_submitted_directly_is_sent() {
    let mount = create_mount_point();
    yew::Renderer::<Portfolio>::with_root(mount.clone()).render();
    TimeoutFuture::new(0).await;

    fill_required(&mount);
    TimeoutFuture::new(0).await;

    submit(&mount, ".contact-form");
    TimeoutFuture::new(50).await;
    assert_eq!(text_of(&mount, ".submit-button"), "Sending...");

    TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS + 300).await;
    assert_eq!(text_of(&mount, ".toast-message"), SUBMIT_SUCCESS_MESSAGE);
    assert_eq!(control_value(&mount, "fullName"), "");

    cleanup(&mount);
}

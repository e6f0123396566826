use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config::{PARALLAX_END_PX, PARALLAX_START_PX};

/// Events after which the scroll position or scrollable height may differ.
const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Vertical scroll position as a fraction of the scrollable height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    fraction: f64,
}

impl ScrollProgress {
    pub fn from_offset(offset: f64, scrollable_height: f64) -> Self {
        let fraction = if scrollable_height > 0.0 {
            (offset / scrollable_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { fraction }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Progress bar width, 0 to 100.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Vertical translation applied to the hero's decorative blobs.
    pub fn parallax_y(&self) -> f64 {
        PARALLAX_START_PX + (PARALLAX_END_PX - PARALLAX_START_PX) * self.fraction
    }
}

fn sample(window: &Window) -> Option<ScrollProgress> {
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollProgress::from_offset(offset, height - viewport))
}

/// A live listener on window scroll/resize. Dropping it unsubscribes.
pub struct ScrollSubscription {
    window: Window,
    listener: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    /// Call `on_change` with the current progress now and on every scroll or resize.
    pub fn subscribe<F>(on_change: F) -> Option<Self>
    where
        F: Fn(ScrollProgress) + 'static,
    {
        let window = web_sys::window()?;
        let listener = {
            let window = window.clone();
            Closure::<dyn Fn()>::new(move || {
                if let Some(progress) = sample(&window) {
                    on_change(progress);
                }
            })
        };

        let subscription = Self { window, listener };
        for event in SCROLL_EVENTS {
            if let Err(err) = subscription.window.add_event_listener_with_callback(
                event,
                subscription.listener.as_ref().unchecked_ref(),
            ) {
                warn!("could not listen for {event}: {err:?}");
                return None;
            }
        }

        // Initial sample so consumers don't wait for the first scroll.
        let _ = subscription
            .listener
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);

        Some(subscription)
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in SCROLL_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
    }
}

/// Current document scroll progress, updated for the lifetime of the component.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = use_state_eq(ScrollProgress::default);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::subscribe(move |p| progress.set(p));
                move || {
                    if let Some(subscription) = subscription {
                        subscription.unsubscribe();
                    }
                }
            },
            (),
        );
    }

    *progress
}

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report ratios like 0.29999 when crossing a 0.3 threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Fires once, the first time an element is at least `threshold` visible.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Feed one observation. Returns true only on the observation that trips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Observer watching a single element until it first becomes visible.
/// Dropping it disconnects the observer.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceObserver {
    pub fn observe<F>(element: &Element, threshold: f64, on_visible: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let mut latch = VisibilityLatch::new(threshold);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.disconnect();
                        on_visible();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True from the first moment `node` is at least `threshold` visible, forever after.
///
/// Fails open: if the element can't be observed it counts as seen right away,
/// so nothing gated on it stays hidden.
#[hook]
pub fn use_in_view_once(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watch = None;
                if !*seen {
                    let on_visible = {
                        let seen = seen.clone();
                        move || seen.set(true)
                    };
                    watch = node
                        .cast::<Element>()
                        .and_then(|element| OnceObserver::observe(&element, threshold, on_visible));
                    if watch.is_none() {
                        warn!("Cannot observe element visibility, showing it immediately");
                        seen.set(true);
                    }
                }
                move || drop(watch)
            },
            node,
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(true, 0.1));
        assert!(latch.observe(true, 0.3));
        assert!(latch.fired());
    }

    #[test]
    fn re_entering_viewport_does_not_refire() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(latch.observe(true, 0.5));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.9));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn ignores_non_intersecting_entries() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(false, 0.8));
        assert!(!latch.fired());
    }

    #[test]
    fn zero_threshold_fires_on_first_intersection() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.0));
    }

    #[test]
    fn tolerates_rounding_just_under_threshold() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(latch.observe(true, 0.2999));
    }
}

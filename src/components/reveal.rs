use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::browser;
use crate::config::SiteConfig;
use crate::error::SiteError;

/// One-shot visibility latch. Flips on the first intersecting observation and
/// ignores everything after that, so a revealed block never hides again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true exactly once: on the first call with `is_intersecting`.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Intersection ratio the observer waits for. A block taller than the viewport
/// is never fully on screen, so the ratio is scaled to the share that fits.
pub fn effective_threshold(ratio: f64, element_height: f64, viewport_height: f64) -> f64 {
    let ratio = ratio.clamp(0.0, 1.0);
    if element_height <= viewport_height || element_height <= 0.0 || viewport_height <= 0.0 {
        return ratio;
    }
    ratio * viewport_height / element_height
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct OnceObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    threshold: f64,
    on_reveal: impl Fn() + 'static,
) -> Result<OnceObserver, SiteError> {
    let latch = Rc::new(RefCell::new(RevealLatch::default()));

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.borrow_mut().observe(intersecting) {
                observer.disconnect();
                on_reveal();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(OnceObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Seconds to wait before the entrance transition starts.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let threshold = config.reveal_threshold;
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<HtmlElement>() {
                    Some(element) => {
                        let threshold = effective_threshold(
                            threshold,
                            element.offset_height() as f64,
                            browser::viewport_height(),
                        );
                        let on_reveal = revealed.clone();
                        let result = observe_once(&element, threshold, move || {
                            debug!("Reveal triggered");
                            on_reveal.set(true);
                        });
                        result
                            .map_err(|e| {
                                // Without an observer the block would stay hidden forever.
                                warn!("Reveal observer unavailable, showing content: {}", e);
                                revealed.set(true);
                            })
                            .ok()
                    }
                    None => None,
                };
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            <div
                class={classes!("reveal-inner", (*revealed).then(|| "revealed"))}
                style={format!("transition-delay: {}s;", props.delay)}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_unchanged_for_blocks_that_fit() {
        assert_eq!(effective_threshold(0.2, 400.0, 800.0), 0.2);
        assert_eq!(effective_threshold(0.2, 800.0, 800.0), 0.2);
    }

    #[test]
    fn test_threshold_reachable_for_tall_blocks() {
        // Six viewports tall: at most 1/6 of it is ever on screen.
        let threshold = effective_threshold(0.2, 4800.0, 800.0);
        assert!(threshold <= 800.0 / 4800.0);
        assert!(threshold > 0.0);
    }

    #[test]
    fn test_threshold_without_layout_falls_back_to_ratio() {
        assert_eq!(effective_threshold(0.2, 0.0, 800.0), 0.2);
        assert_eq!(effective_threshold(0.2, 1200.0, 0.0), 0.2);
        assert_eq!(effective_threshold(1.5, 100.0, 800.0), 1.0);
    }

    #[test]
    fn test_latch_ignores_non_intersecting() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_triggers_on_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_triggers_at_most_once() {
        let mut latch = RevealLatch::default();
        let sequence = [false, true, false, true, true, false, true];
        let triggers = sequence.iter().filter(|hit| latch.observe(**hit)).count();
        assert_eq!(triggers, 1);
        assert!(latch.is_revealed());
    }
}

//! "Animate once when scrolled into view" support.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Elements start revealing once they are 100px inside the viewport.
pub const REVEAL_MARGIN: &str = "-100px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live one-shot observer. Dropping it disconnects the observer if it has
/// not fired yet.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Runs `on_visible` the first time `element` intersects the viewport, then
/// stops observing it.
pub fn observe_visibility(
    element: &Element,
    root_margin: &str,
    on_visible: impl FnOnce() + 'static,
) -> Result<VisibilityObserver, JsValue> {
    let pending = Rc::new(RefCell::new(Some(Box::new(on_visible) as Box<dyn FnOnce()>)));

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if !intersecting {
                return;
            }
            observer.disconnect();
            if let Some(on_visible) = pending.borrow_mut().take() {
                on_visible();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

/// `true` from the first time `node` scrolls into view onwards.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match observe_visibility(&element, REVEAL_MARGIN, on_visible) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            // Without an observer the content would stay hidden.
                            warn!("IntersectionObserver unavailable: {:?}", err);
                            revealed.set(true);
                            None
                        }
                    }
                });

                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

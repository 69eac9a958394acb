//! Active-section tracking and smooth-scroll navigation.
//!
//! The pure parts ([`active_section`], [`navigate_to`], [`parallax`]) only
//! talk to a [`Viewport`], so they can be driven from fixtures. The browser
//! side lives in [`BrowserViewport`] and the hooks at the bottom.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::content::{NavEntry, SectionId};

pub trait Viewport {
    /// Top offset of the element with this anchor id, `None` if it is not mounted.
    fn element_offset(&self, anchor: &str) -> Option<f64>;
    fn scroll_position(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn smooth_scroll_to(&self, offset: f64);
}

/// The section whose top has most recently crossed the line one third down
/// the viewport. `None` when the page is scrolled above every section; the
/// caller keeps whatever was active before.
pub fn active_section<V: Viewport>(viewport: &V, entries: &[NavEntry]) -> Option<SectionId> {
    let reference = viewport.scroll_position() + viewport.viewport_height() / 3.0;

    entries.iter().rev().find_map(|entry| {
        viewport
            .element_offset(entry.id.anchor())
            .filter(|top| *top <= reference)
            .map(|_| entry.id)
    })
}

pub fn navigate_to<V: Viewport>(viewport: &V, section: SectionId) {
    match viewport.element_offset(section.anchor()) {
        Some(top) => viewport.smooth_scroll_to(top),
        None => debug!("No element for section '{}', skipping scroll", section.anchor()),
    }
}

pub fn scroll_to_top<V: Viewport>(viewport: &V) {
    viewport.smooth_scroll_to(0.0);
}

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
pub fn parallax(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    /// Registers `callback` for window scroll events until the returned
    /// subscription is dropped.
    pub fn on_scroll(&self, callback: impl FnMut() + 'static) -> Result<ScrollSubscription, JsValue> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(ScrollSubscription {
            window: self.window.clone(),
            callback,
        })
    }
}

impl Viewport for BrowserViewport {
    fn element_offset(&self, anchor: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(anchor)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn scroll_position(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Smooth-scrolls the window to `section`. Used as the menu's navigate callback.
pub fn navigate(section: SectionId) {
    if let Some(viewport) = BrowserViewport::new() {
        navigate_to(&viewport, section);
    }
}

/// Section currently under the reading line, recomputed on every scroll event.
#[hook]
pub fn use_active_section(entries: &'static [NavEntry]) -> SectionId {
    let active = use_state_eq(|| entries.first().map(|e| e.id).unwrap_or_default());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserViewport::new().and_then(|viewport| {
                    let tracker = viewport.clone();
                    let update = move || {
                        if let Some(section) = active_section(&tracker, entries) {
                            active.set(section);
                        }
                    };
                    // Initial check
                    update();
                    viewport
                        .on_scroll(update)
                        .map_err(|err| warn!("Could not track active section: {:?}", err))
                        .ok()
                });

                move || drop(subscription)
            },
            (),
        );
    }

    *active
}

/// Current `window.scrollY`, for scroll-linked transforms.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state_eq(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserViewport::new().and_then(|viewport| {
                    let reader = viewport.clone();
                    offset.set(reader.scroll_position());
                    viewport
                        .on_scroll(move || offset.set(reader.scroll_position()))
                        .map_err(|err| warn!("Could not track scroll offset: {:?}", err))
                        .ok()
                });

                move || drop(subscription)
            },
            (),
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ENTRIES;
    use std::cell::{Cell, RefCell};

    struct Page {
        tops: Vec<(&'static str, f64)>,
        scroll: Cell<f64>,
        height: f64,
        scrolled_to: RefCell<Vec<f64>>,
    }

    impl Page {
        fn new(tops: Vec<(&'static str, f64)>, height: f64) -> Self {
            Self {
                tops,
                scroll: Cell::new(0.0),
                height,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for Page {
        fn element_offset(&self, anchor: &str) -> Option<f64> {
            self.tops.iter().find(|(id, _)| *id == anchor).map(|(_, top)| *top)
        }

        fn scroll_position(&self) -> f64 {
            self.scroll.get()
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn smooth_scroll_to(&self, offset: f64) {
            self.scrolled_to.borrow_mut().push(offset);
        }
    }

    #[test]
    fn section_becomes_active_once_its_top_crosses_the_line() {
        let page = Page::new(vec![("hero", 0.0), ("portfolio", 800.0)], 900.0);
        // reference = 500 + 300
        page.scroll.set(499.0);
        assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Hero));
        page.scroll.set(500.0);
        assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Portfolio));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let page = Page::new(vec![("hero", 0.0), ("blog", 1200.0)], 900.0);
        page.scroll.set(5000.0);
        assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Blog));
    }

    #[test]
    fn nothing_active_above_every_section() {
        let page = Page::new(vec![("hero", 400.0)], 900.0);
        assert_eq!(active_section(&page, NAV_ENTRIES), None);
    }

    #[test]
    fn navigate_scrolls_to_section_top() {
        let page = Page::new(vec![("hero", 0.0), ("contact", 3200.0)], 900.0);
        navigate_to(&page, SectionId::Contact);
        navigate_to(&page, SectionId::About);
        scroll_to_top(&page);
        assert_eq!(*page.scrolled_to.borrow(), [3200.0, 0.0]);
    }

    #[test]
    fn parallax_clamps_outside_input_range() {
        assert_eq!(parallax(0.0, (0.0, 500.0), (0.0, 200.0)), 0.0);
        assert_eq!(parallax(250.0, (0.0, 500.0), (0.0, 200.0)), 100.0);
        assert_eq!(parallax(2000.0, (0.0, 500.0), (0.0, 200.0)), 200.0);
        assert_eq!(parallax(250.0, (0.0, 500.0), (0.0, -100.0)), -50.0);
        assert_eq!(parallax(-20.0, (0.0, 500.0), (0.0, -100.0)), 0.0);
    }
}

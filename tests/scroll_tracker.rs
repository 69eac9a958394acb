use std::cell::Cell;

use architectura::content::{SectionId, NAV_ENTRIES};
use architectura::scroll::{active_section, Viewport};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hero, portfolio and about mounted at fixed tops; blog and contact not yet rendered.
struct ThreeSections {
    scroll: Cell<f64>,
}

impl Viewport for ThreeSections {
    fn element_offset(&self, anchor: &str) -> Option<f64> {
        match anchor {
            "hero" => Some(0.0),
            "portfolio" => Some(800.0),
            "about" => Some(1600.0),
            _ => None,
        }
    }

    fn scroll_position(&self) -> f64 {
        self.scroll.get()
    }

    fn viewport_height(&self) -> f64 {
        900.0
    }

    fn smooth_scroll_to(&self, offset: f64) {
        self.scroll.set(offset);
    }
}

#[test]
fn active_section_follows_reference_line() {
    setup();

    let page = ThreeSections { scroll: Cell::new(0.0) };
    assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Hero));

    // reference = 1000 + 300 = 1300
    page.scroll.set(1000.0);
    assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Portfolio));

    // reference = 2000 + 300 = 2300
    page.scroll.set(2000.0);
    assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::About));
}

#[test]
fn last_crossed_section_wins_over_earlier_ones() {
    setup();

    let page = ThreeSections { scroll: Cell::new(10_000.0) };
    assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::About));
}

#[test]
fn navigating_then_tracking_lands_on_target() {
    setup();

    let page = ThreeSections { scroll: Cell::new(0.0) };
    architectura::scroll::navigate_to(&page, SectionId::Portfolio);
    assert_eq!(page.scroll.get(), 800.0);
    assert_eq!(active_section(&page, NAV_ENTRIES), Some(SectionId::Portfolio));

    // Not mounted: position untouched.
    architectura::scroll::navigate_to(&page, SectionId::Contact);
    assert_eq!(page.scroll.get(), 800.0);
}

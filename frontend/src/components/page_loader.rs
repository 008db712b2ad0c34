use custom_theme_shared::{InitGuard, ThemeConfig};
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::dom;

pub struct PageLoader {
    selector: String,
    fade_delay_ms: u32,
    hide_delay_ms: u32,
    guard: InitGuard,
}

impl PageLoader {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            selector: config.selectors.page_loader.clone(),
            fade_delay_ms: config.timings.loader_fade_delay_ms,
            hide_delay_ms: config.timings.loader_hide_delay_ms,
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let Some(loader) = dom::query(&self.selector) else {
            return;
        };
        let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        let (fade, hide) = (self.fade_delay_ms, self.hide_delay_ms);
        // `load` has already fired when the script itself ran late.
        if document.ready_state() == "complete" {
            schedule_hide(loader, fade, hide);
        } else {
            dom::listen(&window, "load", move |_| schedule_hide(loader.clone(), fade, hide));
        }
    }
}

/// Fade the overlay after `fade_ms`, then drop it from layout `hide_ms` later.
fn schedule_hide(loader: Element, fade_ms: u32, hide_ms: u32) {
    Timeout::new(fade_ms, move || {
        let _ = dom::set_style(&loader, "opacity", "0");
        Timeout::new(hide_ms, move || {
            let _ = dom::set_style(&loader, "display", "none");
        })
        .forget();
    })
    .forget();
}

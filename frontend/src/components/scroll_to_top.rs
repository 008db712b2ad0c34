use custom_theme_shared::{
    scroll::{back_to_top_visible, display_for},
    InitGuard, ThemeConfig,
};
use web_sys::{Element, Event};

use crate::{dom, timing};

pub struct ScrollToTop {
    selector: String,
    threshold_px: f64,
    throttle_ms: u32,
    guard: InitGuard,
}

impl ScrollToTop {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            selector: config.selectors.scroll_to_top.clone(),
            threshold_px: config.timings.scroll_threshold_px,
            throttle_ms: config.timings.scroll_throttle_ms,
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let Some(button) = dom::query(&self.selector) else {
            return;
        };
        let Some(window) = dom::window() else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        let threshold = self.threshold_px;
        update_visibility(&button, threshold);

        dom::listen(&button, "click", |event| {
            event.prevent_default();
            dom::scroll_window_to_top();
        });

        dom::listen(
            &window,
            "scroll",
            timing::throttle(self.throttle_ms, move |_: Event| {
                update_visibility(&button, threshold)
            }),
        );
    }
}

fn update_visibility(button: &Element, threshold_px: f64) {
    let visible = back_to_top_visible(dom::scroll_offset(), threshold_px);
    if let Err(err) = dom::set_style(button, "display", display_for(visible)) {
        web_sys::console::warn_1(&format!("Scroll-to-top not updated: {err}").into());
    }
}

use custom_theme_shared::{scroll::anchor_target_id, InitGuard, Selectors};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

pub struct SmoothScroll {
    selector: String,
    guard: InitGuard,
}

impl SmoothScroll {
    pub fn new(selectors: &Selectors) -> Self {
        Self {
            selector: selectors.anchors.clone(),
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let links = dom::query_all(&self.selector);
        if links.is_empty() || !self.guard.claim() {
            return;
        }

        for link in links {
            let anchor = link.clone();
            dom::listen(&link, "click", move |event| {
                // Read the anchor's own href; the click may land on a nested child.
                let Some(id) = anchor_target_id(anchor.get_attribute("href").as_deref()) else {
                    return;
                };
                let Some(target) = dom::document().and_then(|doc| doc.get_element_by_id(&id))
                else {
                    return;
                };
                event.prevent_default();

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            });
        }
    }
}

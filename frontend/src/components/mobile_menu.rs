use custom_theme_shared::{InitGuard, Selectors};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::dom;

const NAV_OPEN_CLASS: &str = "mobile-active";
const TOGGLE_OPEN_CLASS: &str = "active";

pub struct MobileMenu {
    toggle_selector: String,
    nav_selector: String,
    guard: InitGuard,
}

impl MobileMenu {
    pub fn new(selectors: &Selectors) -> Self {
        Self {
            toggle_selector: selectors.mobile_toggle.clone(),
            nav_selector: selectors.nav.clone(),
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let (Some(toggle), Some(nav)) =
            (dom::query(&self.toggle_selector), dom::query(&self.nav_selector))
        else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        {
            let toggle_el = toggle.clone();
            let nav = nav.clone();
            dom::listen(&toggle, "click", move |_| {
                let open = nav.class_list().toggle(NAV_OPEN_CLASS).unwrap_or(false);
                set_open(&nav, &toggle_el, open);
            });
        }

        dom::listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !nav.contains(target.as_ref()) && !toggle.contains(target.as_ref()) {
                set_open(&nav, &toggle, false);
            }
        });
    }
}

fn set_open(nav: &Element, toggle: &Element, open: bool) {
    let _ = nav.class_list().toggle_with_force(NAV_OPEN_CLASS, open);
    let _ = toggle.class_list().toggle_with_force(TOGGLE_OPEN_CLASS, open);
    let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

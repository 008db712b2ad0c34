use custom_theme_shared::{
    preference::dark_mode_icon, ClassTarget, InitGuard, Mode, ModeToggle, Selectors,
};
use web_sys::Element;

use crate::dom::{self, ElementClasses, LocalStore};

/// Button flipping one persisted body class (dark mode or read mode).
pub struct ModeSwitch {
    selector: String,
    toggle: ModeToggle<LocalStore>,
    guard: InitGuard,
}

impl ModeSwitch {
    pub fn dark(selectors: &Selectors) -> Self {
        Self::new(Mode::Dark, &selectors.dark_toggle)
    }

    pub fn read(selectors: &Selectors) -> Self {
        Self::new(Mode::Read, &selectors.read_toggle)
    }

    fn new(mode: Mode, selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            toggle: ModeToggle::new(mode, LocalStore),
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let mode = self.toggle.mode();
        let Some(button) = dom::query(&self.selector) else {
            web_sys::console::log_1(&format!("{mode:?} mode toggle not found").into());
            return;
        };
        let Some(body) = dom::body_element() else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        let enabled = self.toggle.restore(&ElementClasses(&body)).unwrap_or_else(|err| {
            web_sys::console::warn_1(&format!("Could not restore {mode:?} mode: {err}").into());
            false
        });
        reflect_state(mode, &button, enabled);

        let toggle = self.toggle.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |event| {
            if mode == Mode::Dark {
                event.prevent_default();
                event.stop_propagation();
            }
            let classes = ElementClasses(&body);
            if let Err(err) = toggle.toggle(&classes) {
                web_sys::console::warn_1(&format!("{mode:?} mode not persisted: {err}").into());
            }
            reflect_state(mode, &target, classes.has_class(mode.body_class()));
        });
    }
}

fn reflect_state(mode: Mode, button: &Element, enabled: bool) {
    let _ = button.set_attribute("aria-pressed", if enabled { "true" } else { "false" });
    if mode != Mode::Dark {
        return;
    }
    if let Ok(Some(icon)) = button.query_selector("i") {
        icon.set_class_name(dark_mode_icon(enabled));
    }
}

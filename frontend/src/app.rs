use std::rc::Rc;

use custom_theme_shared::{InitGuard, PlaceholderSearch, ThemeConfig};
use wasm_bindgen::{closure::Closure, JsValue};

use crate::{
    components::{
        code_copy::CodeCopy, lazy_load::LazyLoad, mobile_menu::MobileMenu, mode_toggle::ModeSwitch,
        page_loader::PageLoader, scroll_to_top::ScrollToTop, search::Search,
        smooth_scroll::SmoothScroll,
    },
    dom,
    i18n::current::{app as t, search as search_t},
};

/// Global the page can call to re-run initialization (e.g. after a pjax swap).
pub const ENTRY_POINT: &str = "__customThemeInit";

/// Owns every component and runs their `init` once the DOM is parsed.
pub struct App {
    guard: InitGuard,
    dark_mode: ModeSwitch,
    read_mode: ModeSwitch,
    scroll_to_top: ScrollToTop,
    mobile_menu: MobileMenu,
    search: Search<PlaceholderSearch>,
    code_copy: CodeCopy,
    lazy_load: LazyLoad,
    smooth_scroll: SmoothScroll,
    page_loader: PageLoader,
}

impl App {
    pub fn new(config: ThemeConfig) -> Self {
        let selectors = &config.selectors;
        Self {
            guard: InitGuard::new(),
            dark_mode: ModeSwitch::dark(selectors),
            read_mode: ModeSwitch::read(selectors),
            scroll_to_top: ScrollToTop::new(&config),
            mobile_menu: MobileMenu::new(selectors),
            search: Search::new(
                &config,
                PlaceholderSearch::new(search_t::UNDER_DEVELOPMENT, search_t::KEYWORD_LABEL),
            ),
            code_copy: CodeCopy::new(&config),
            lazy_load: LazyLoad::new(selectors),
            smooth_scroll: SmoothScroll::new(selectors),
            page_loader: PageLoader::new(&config),
        }
    }

    /// Start now, or on `DOMContentLoaded` while the parser is still running.
    /// Later calls are no-ops.
    pub fn init(self: &Rc<Self>) {
        if self.guard.is_claimed() {
            return;
        }
        let Some(document) = dom::document() else {
            return;
        };

        if document.ready_state() == "loading" {
            let app = Rc::clone(self);
            dom::listen(&document, "DOMContentLoaded", move |_| app.start());
        } else {
            self.start();
        }
    }

    fn start(&self) {
        if !self.guard.claim() {
            return;
        }

        self.dark_mode.init();
        self.read_mode.init();
        self.scroll_to_top.init();
        self.mobile_menu.init();
        self.search.init();
        self.code_copy.init();
        self.lazy_load.init();
        self.smooth_scroll.init();
        self.page_loader.init();

        if let Some(body) = dom::body_element() {
            let _ = body.class_list().add_1("loaded");
        }
        web_sys::console::log_1(&t::READY.into());
    }

    /// Publish [`ENTRY_POINT`] on `window`, bound to this instance.
    pub fn expose(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };
        let app = Rc::clone(self);
        let entry = Closure::wrap(Box::new(move || app.init()) as Box<dyn Fn()>);
        match js_sys::Reflect::set(&window, &JsValue::from_str(ENTRY_POINT), entry.as_ref()) {
            Ok(_) => entry.forget(),
            Err(err) => web_sys::console::warn_1(
                &format!("Could not expose {ENTRY_POINT}: {}", dom::describe(&err)).into(),
            ),
        }
    }
}

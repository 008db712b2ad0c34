use std::rc::Rc;

use custom_theme_shared::{
    search::classify_query, InitGuard, QueryAction, Result, SearchBackend, SearchHit, ThemeConfig,
    ThemeError,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, Node};

use crate::{
    dom::{self, js_error},
    i18n::current::search as t,
    timing,
};

const MODAL_CLASS: &str = "search-modal";

/// Search modal opened from the header, backed by any [`SearchBackend`].
pub struct Search<B> {
    toggle_selector: String,
    modal_selector: String,
    debounce_ms: u32,
    min_chars: usize,
    backend: Rc<B>,
    guard: InitGuard,
}

/// The modal's live parts.
#[derive(Clone)]
struct Modal {
    root: Element,
    input: HtmlInputElement,
    results: Element,
    close: Element,
}

impl<B: SearchBackend + 'static> Search<B> {
    pub fn new(config: &ThemeConfig, backend: B) -> Self {
        Self {
            toggle_selector: config.selectors.search_toggle.clone(),
            modal_selector: config.selectors.search_modal.clone(),
            debounce_ms: config.timings.search_debounce_ms,
            min_chars: config.timings.search_min_chars,
            backend: Rc::new(backend),
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let Some(toggle) = dom::query(&self.toggle_selector) else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        let modal = match self.locate_or_build(&document) {
            Ok(modal) => modal,
            Err(err) => {
                web_sys::console::error_1(&format!("Search modal unavailable: {err}").into());
                return;
            },
        };

        {
            let modal = modal.clone();
            dom::listen(&toggle, "click", move |_| modal.open());
        }
        self.bind_modal(&document, modal);
    }

    fn locate_or_build(&self, document: &Document) -> Result<Modal> {
        match dom::query(&self.modal_selector) {
            Some(root) => Modal::from_markup(root),
            None => Modal::build(document),
        }
    }

    fn bind_modal(&self, document: &Document, modal: Modal) {
        {
            let modal_for_close = modal.clone();
            dom::listen(&modal.close, "click", move |_| modal_for_close.close());
        }

        {
            let modal_for_backdrop = modal.clone();
            dom::listen(&modal.root, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                if modal_for_backdrop.root.is_same_node(target.as_ref()) {
                    modal_for_backdrop.close();
                }
            });
        }

        {
            let modal_for_keys = modal.clone();
            dom::listen(document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if is_escape && modal_for_keys.is_open() {
                    modal_for_keys.close();
                }
            });
        }

        let backend = Rc::clone(&self.backend);
        let min_chars = self.min_chars;
        let input = modal.input.clone();
        dom::listen(
            &input,
            "input",
            timing::debounce(self.debounce_ms, move |_: Event| {
                let outcome = match classify_query(&modal.input.value(), min_chars) {
                    QueryAction::Clear => {
                        modal.results.set_inner_html("");
                        Ok(())
                    },
                    QueryAction::Search(query) => modal.render(&backend.search(&query)),
                };
                if let Err(err) = outcome {
                    web_sys::console::error_1(&format!("Search results not rendered: {err}").into());
                }
            }),
        );
    }
}

impl Modal {
    fn from_markup(root: Element) -> Result<Self> {
        let part = |selector: &str| {
            root.query_selector(selector)
                .map_err(js_error)?
                .ok_or_else(|| ThemeError::Dom(format!("search modal is missing `{selector}`")))
        };
        let input = part(".search-input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ThemeError::Dom("`.search-input` is not an <input>".into()))?;
        let results = part(".search-results")?;
        let close = part(".search-close")?;
        Ok(Self {
            root,
            input,
            results,
            close,
        })
    }

    fn build(document: &Document) -> Result<Self> {
        let root = document.create_element("div").map_err(js_error)?;
        root.set_class_name(MODAL_CLASS);
        root.set_inner_html(&format!(
            r#"<div class="search-modal-content">
  <div class="search-header">
    <input type="text" class="search-input" placeholder="{placeholder}">
    <button type="button" class="search-close" aria-label="{close}">&times;</button>
  </div>
  <div class="search-results"></div>
</div>"#,
            placeholder = t::PLACEHOLDER,
            close = t::CLOSE,
        ));
        document
            .body()
            .ok_or_else(|| ThemeError::Dom("document has no <body>".into()))?
            .append_child(&root)
            .map_err(js_error)?;
        Self::from_markup(root)
    }

    fn is_open(&self) -> bool {
        dom::style_value(&self.root, "display").is_some_and(|display| display == "flex")
    }

    fn open(&self) {
        if let Err(err) = dom::set_style(&self.root, "display", "flex") {
            web_sys::console::warn_1(&format!("Search modal not opened: {err}").into());
            return;
        }
        let _ = self.input.focus();
    }

    fn close(&self) {
        let _ = dom::set_style(&self.root, "display", "none");
        self.input.set_value("");
        self.results.set_inner_html("");
    }

    /// Hits are written as text nodes so queries never become markup.
    fn render(&self, hits: &[SearchHit]) -> Result<()> {
        let document = self
            .results
            .owner_document()
            .ok_or_else(|| ThemeError::Dom("results pane is detached".into()))?;
        self.results.set_inner_html("");

        for hit in hits {
            let item = document.create_element("div").map_err(js_error)?;
            item.set_class_name("search-result-item");

            let title = document.create_element("p").map_err(js_error)?;
            match &hit.url {
                Some(url) => {
                    let link = document.create_element("a").map_err(js_error)?;
                    link.set_attribute("href", url).map_err(js_error)?;
                    link.set_text_content(Some(hit.title.as_str()));
                    title.append_child(&link).map_err(js_error)?;
                },
                None => title.set_text_content(Some(hit.title.as_str())),
            }
            item.append_child(&title).map_err(js_error)?;

            let excerpt = document.create_element("p").map_err(js_error)?;
            excerpt.set_text_content(Some(hit.excerpt.as_str()));
            if let Some(highlight) = &hit.highlight {
                let strong = document.create_element("strong").map_err(js_error)?;
                strong.set_text_content(Some(highlight.as_str()));
                excerpt.append_child(&strong).map_err(js_error)?;
            }
            item.append_child(&excerpt).map_err(js_error)?;

            self.results.append_child(&item).map_err(js_error)?;
        }
        Ok(())
    }
}

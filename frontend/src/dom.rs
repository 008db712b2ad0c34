//! Thin wrappers over `web-sys` for selector lookups, listener binding,
//! inline styles, scrolling and the storage / class-list seams.

use custom_theme_shared::{ClassTarget, PreferenceStore, Result, ThemeError};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Storage,
    Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body_element() -> Option<Element> {
    document()?.body().map(Element::from)
}

/// First element matching `selector`. Invalid selectors count as no match.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn js_error(err: JsValue) -> ThemeError {
    ThemeError::Dom(describe(&err))
}

pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Bind `handler` for the lifetime of the page.
///
/// Components never unbind, so the closure is leaked once the browser holds it.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => callback.forget(),
        Err(err) => web_sys::console::error_1(
            &format!("Failed to bind `{event}` listener: {}", describe(&err)).into(),
        ),
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| ThemeError::Dom(format!("<{}> has no inline style", element.tag_name())))?;
    element.style().set_property(property, value).map_err(js_error)
}

pub fn style_value(element: &Element, property: &str) -> Option<String> {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value(property).ok())
}

/// Current vertical scroll offset in px.
pub fn scroll_offset() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };
    match win.scroll_y() {
        Ok(offset) => offset,
        Err(_) => win
            .document()
            .and_then(|doc| doc.document_element())
            .map(|el| f64::from(el.scroll_top()))
            .unwrap_or(0.0),
    }
}

pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Millisecond clock for throttling.
pub fn now_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Class list of an element, seen through the shared [`ClassTarget`] seam.
pub struct ElementClasses<'a>(pub &'a Element);

impl ClassTarget for ElementClasses<'_> {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<()> {
        let list = self.0.class_list();
        let outcome = if on { list.add_1(class) } else { list.remove_1(class) };
        outcome.map_err(js_error)
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage> {
        window()
            .ok_or_else(|| ThemeError::Storage("no global `window`".into()))?
            .local_storage()
            .map_err(|err| ThemeError::Storage(describe(&err)))?
            .ok_or_else(|| ThemeError::Storage("localStorage is disabled".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }
}

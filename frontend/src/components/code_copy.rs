use std::rc::Rc;

use custom_theme_shared::{CopyFeedback, Generation, InitGuard, Result, ThemeConfig, ThemeError};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use crate::{
    dom::{self, describe, js_error},
    i18n::current::code_copy as t,
};

const BUTTON_CLASS: &str = "copy-button";

pub struct CodeCopy {
    selector: String,
    feedback_ms: u32,
    guard: InitGuard,
}

impl CodeCopy {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            selector: config.selectors.code_blocks.clone(),
            feedback_ms: config.timings.copy_feedback_ms,
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let blocks = dom::query_all(&self.selector);
        if blocks.is_empty() {
            return;
        }
        let Some(document) = dom::document() else {
            return;
        };
        if !self.guard.claim() {
            return;
        }

        for block in blocks {
            if let Err(err) = attach_button(&document, block, self.feedback_ms) {
                web_sys::console::warn_1(&format!("Copy button not added: {err}").into());
            }
        }
    }
}

fn attach_button(document: &Document, block: Element, feedback_ms: u32) -> Result<()> {
    let Some(pre) = block.parent_element() else {
        return Ok(());
    };
    if pre.query_selector(&format!(".{BUTTON_CLASS}")).map_err(js_error)?.is_some() {
        return Ok(());
    }

    let button = document.create_element("button").map_err(js_error)?;
    button.set_class_name(BUTTON_CLASS);
    button.set_attribute("type", "button").map_err(js_error)?;
    button.set_attribute("title", t::TITLE).map_err(js_error)?;
    show_feedback(&button, CopyFeedback::Idle);

    dom::set_style(&pre, "position", "relative")?;
    pre.append_child(&button).map_err(js_error)?;

    let target = button.clone();
    let clicks = Rc::new(Generation::new());
    dom::listen(&button, "click", move |_| {
        let button = target.clone();
        let clicks = Rc::clone(&clicks);
        let click = clicks.bump();
        let text = block.text_content().unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = write_clipboard(&text).await;
            if let Err(err) = &outcome {
                web_sys::console::error_1(&format!("复制失败: {err}").into());
            }
            if !clicks.is_current(click) {
                return;
            }
            show_feedback(&button, CopyFeedback::from_outcome(&outcome));
            TimeoutFuture::new(feedback_ms).await;
            // A later click owns the button now and schedules its own revert.
            if clicks.is_current(click) {
                show_feedback(&button, CopyFeedback::Idle);
            }
        });
    });
    Ok(())
}

fn show_feedback(button: &Element, feedback: CopyFeedback) {
    button.set_inner_html(&format!(r#"<i class="{}"></i>"#, feedback.icon_class()));
    let _ = dom::set_style(button, "color", feedback.color());
}

/// `navigator.clipboard.writeText`, probed at runtime: the API is absent in
/// insecure contexts and older browsers.
async fn write_clipboard(text: &str) -> Result<()> {
    let clipboard_err = |err: JsValue| ThemeError::Clipboard(describe(&err));

    let window = dom::window().ok_or_else(|| ThemeError::Clipboard("no global `window`".into()))?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(clipboard_err)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ThemeError::Clipboard("navigator.clipboard is unavailable".into()));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(clipboard_err)?;
    let write_fn = write_text
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| ThemeError::Clipboard("clipboard.writeText is not callable".into()))?;
    let promise = write_fn
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(clipboard_err)?
        .dyn_into::<js_sys::Promise>()
        .map_err(clipboard_err)?;

    JsFuture::from(promise).await.map(|_| ()).map_err(clipboard_err)
}

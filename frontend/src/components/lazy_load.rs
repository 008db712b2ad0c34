use custom_theme_shared::{
    lazy::{promotable_source, DEFERRED_SRC_ATTR, LOADED_CLASS},
    InitGuard, LoadStrategy, Selectors,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct LazyLoad {
    selector: String,
    guard: InitGuard,
}

impl LazyLoad {
    pub fn new(selectors: &Selectors) -> Self {
        Self {
            selector: selectors.lazy_images.clone(),
            guard: InitGuard::new(),
        }
    }

    pub fn init(&self) {
        if self.guard.is_claimed() {
            return;
        }
        let images = dom::query_all(&self.selector);
        let strategy = LoadStrategy::choose(images.len(), observer_supported());
        if strategy == LoadStrategy::Skip || !self.guard.claim() {
            return;
        }

        if strategy == LoadStrategy::Observe {
            match observe(&images) {
                Ok(()) => return,
                Err(err) => web_sys::console::warn_1(
                    &format!("IntersectionObserver failed, loading eagerly: {err:?}").into(),
                ),
            }
        }
        images.iter().for_each(load_image);
    }
}

fn observer_supported() -> bool {
    dom::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")))
        .and_then(Result::ok)
        .unwrap_or(false)
}

fn observe(images: &[Element]) -> Result<(), JsValue> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let image = entry.target();
                    load_image(&image);
                    observer.unobserve(&image);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();
    for image in images {
        observer.observe(image);
    }
    Ok(())
}

fn load_image(image: &Element) {
    let Some(src) = promotable_source(image.get_attribute(DEFERRED_SRC_ATTR)) else {
        return;
    };
    let _ = image.set_attribute("src", &src);
    let _ = image.remove_attribute(DEFERRED_SRC_ATTR);
    let _ = image.class_list().add_1(LOADED_CLASS);
}

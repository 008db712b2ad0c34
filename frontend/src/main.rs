//! WebAssembly behavior layer for the custom Hexo theme: dark/read mode,
//! mobile nav, back-to-top, search modal, code copy, lazy images, smooth
//! anchors and the page loader.

mod app;
mod components;
mod config;
mod dom;
mod i18n;
mod timing;

use std::rc::Rc;

fn main() {
    let app = Rc::new(app::App::new(config::load()));
    app.init();
    app.expose();
}

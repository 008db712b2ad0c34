use std::{cell::RefCell, rc::Rc};

use custom_theme_shared::{Generation, Throttle};
use gloo_timers::callback::Timeout;

use crate::dom;

/// Trailing-edge debounce: `f` runs `wait_ms` after the last call.
///
/// Every call takes a fresh ticket; a timer whose ticket was superseded
/// does nothing when it fires.
pub fn debounce<E, F>(wait_ms: u32, f: F) -> impl FnMut(E) + 'static
where
    E: 'static,
    F: FnMut(E) + 'static,
{
    let calls = Rc::new(Generation::new());
    let f = Rc::new(RefCell::new(f));
    move |arg: E| {
        let ticket = calls.bump();
        let calls = Rc::clone(&calls);
        let f = Rc::clone(&f);
        Timeout::new(wait_ms, move || {
            if calls.is_current(ticket) {
                let mut handler = f.borrow_mut();
                (*handler)(arg);
            }
        })
        .forget();
    }
}

/// Leading-edge throttle: at most one call of `f` per `limit_ms`.
pub fn throttle<E, F>(limit_ms: u32, mut f: F) -> impl FnMut(E) + 'static
where
    E: 'static,
    F: FnMut(E) + 'static,
{
    let mut gate = Throttle::new(limit_ms);
    move |arg: E| {
        if gate.ready(dom::now_ms()) {
            f(arg);
        }
    }
}

//! Event listener registration.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget()`. Async handlers run through `spawn_local`.

use std::future::Future;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Attach a synchronous listener.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        gloo_console::error!(format!("could not listen for `{event}`"));
    }
    cb.forget();
}

/// Attach a listener that calls `preventDefault` and then runs `handler`'s
/// future to completion in the background.
pub fn on_async<F, Fut>(target: &EventTarget, event: &str, handler: F)
where
    F: Fn(Event) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    on(target, event, move |e: Event| {
        e.prevent_default();
        spawn(handler(e));
    });
}

pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

//! Storefront WASM front end.
//!
//! Binds the server-rendered storefront pages to the controllers in
//! `sf-interactions`. Each page carries only some components; binding skips
//! whatever is absent.

pub mod api;
pub mod badge;
pub mod cart;
pub mod checkout;
pub mod dom;
pub mod events;
pub mod state;
pub mod toast;
pub mod transfer;
pub mod upload;

use std::rc::Rc;

use sf_interactions::badge::badge_count;
use sf_interactions::cart::CartController;
use sf_interactions::checkout::CheckoutController;
use sf_interactions::{Notifier, ToastKind};
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document();
    if document.ready_state() == "loading" {
        events::on(&document, "DOMContentLoaded", |_| init());
    } else {
        init();
    }
    Ok(())
}

fn init() {
    let cart = CartController::new(state::client(), state::notifier(), Rc::new(badge::DomPage));
    cart::bind(Rc::new(cart));

    let checkout = CheckoutController::new(state::client(), state::notifier(), Rc::new(checkout::DomSummary));
    checkout::bind(Rc::new(checkout));

    transfer::bind();
    upload::bind();
}

/// `showToast(message, kind?)` for page scripts. Unknown kinds show as info.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    state::notifier().notify(message, ToastKind::from_name(kind.as_deref()));
}

/// `updateCartBadge(count)` for page scripts. Takes any JS number; only a
/// positive one shows a badge.
#[wasm_bindgen(js_name = updateCartBadge)]
pub fn update_cart_badge(count: f64) {
    badge::update_cart_badge(badge_count(count));
}

//! Cart page and catalog bindings.

use std::rc::Rc;

use sf_interactions::cart::{CartController, QuantityAction};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::events;

const QUANTITY_CONTROL: &str = ".cart-item__quantity-control";
const REMOVE_FORM: &str = "form[action=\"/api/cart/remove\"]";
const NOTE_CLASS: &str = "cart-item__note";
const ADD_TO_CART: &str = "[data-action=\"add-to-cart\"]";

/// Text of the quantity display on the cart line owning `control`.
fn displayed_quantity(control: &Element) -> Option<String> {
    control
        .closest(".cart-item")
        .ok()??
        .query_selector(".cart-item__quantity-value")
        .ok()??
        .text_content()
}

pub fn bind(cart: Rc<CartController>) {
    for control in dom::query_all(QUANTITY_CONTROL) {
        let cart = cart.clone();
        let el = control.clone();
        events::on_async(&control, "click", move |_| {
            let cart = cart.clone();
            let item_id = dom::data(&el, "itemid");
            let action = QuantityAction::from_attr(dom::data(&el, "action").as_deref());
            let displayed = displayed_quantity(&el);
            async move {
                let _ = cart
                    .change_quantity(item_id.as_deref(), displayed.as_deref(), action)
                    .await;
            }
        });
    }

    for form in dom::query_all(REMOVE_FORM) {
        let cart = cart.clone();
        let el = form.clone();
        events::on_async(&form, "submit", move |_| {
            let cart = cart.clone();
            let item_id = el
                .query_selector("input[name=\"itemId\"]")
                .ok()
                .flatten()
                .and_then(|i| i.dyn_into::<HtmlInputElement>().ok())
                .map(|i| i.value());
            async move {
                let _ = cart.remove_item(item_id.as_deref()).await;
            }
        });
    }

    if let Some(button) = dom::by_id("clearCartButton") {
        let cart = cart.clone();
        events::on_async(&button, "click", move |_| {
            let cart = cart.clone();
            async move {
                let _ = cart.clear().await;
            }
        });
    }

    // Notes save on blur. `focusout` bubbles, so one listener covers every line.
    {
        let cart = cart.clone();
        events::on(&dom::document(), "focusout", move |e| {
            let Some(field) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            else {
                return;
            };
            if !dom::has_class(&field, NOTE_CLASS) {
                return;
            }
            let Some(item_id) = dom::data(&field, "itemid").filter(|id| !id.trim().is_empty()) else {
                return;
            };
            let note = field.value();
            let cart = cart.clone();
            events::spawn(async move {
                cart.save_note(&item_id, &note).await;
            });
        });
    }

    for button in dom::query_all(ADD_TO_CART) {
        let cart = cart.clone();
        let el = button.clone();
        events::on_async(&button, "click", move |_| {
            let cart = cart.clone();
            let item_id = dom::data(&el, "itemid");
            let quantity = dom::data(&el, "quantity");
            async move {
                let _ = cart.add_item(item_id.as_deref(), quantity.as_deref()).await;
            }
        });
    }
}

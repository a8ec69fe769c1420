//! Bank-transfer picker on the payment page.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use sf_interactions::transfer::{ACTIVE_CLASS, BankAccount, BankSelector, Clipboard, TransferView};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::events;
use crate::state;

const BANK_ITEM: &str = ".bank-item";

pub struct DomTransfer {
    items: Vec<Element>,
}

fn set_text_by_id(id: &str, text: &str) {
    if let Some(el) = dom::by_id(id) {
        dom::set_text(&el, text);
    }
}

impl TransferView for DomTransfer {
    fn show_bank(&self, bank: &BankAccount) {
        set_text_by_id("selectedBankName", &bank.name);
        set_text_by_id("selectedAccountNumber", &bank.account_number);
        set_text_by_id("selectedAccountHolder", &bank.holder_line());
        set_text_by_id("bankNameStep", &bank.name);
    }

    fn set_active(&self, index: usize, active: bool) {
        if let Some(item) = self.items.get(index) {
            dom::toggle_class(item, ACTIVE_CLASS, active);
        }
    }

    fn set_instructions_visible(&self, visible: bool) {
        let Some(panel) = dom::by_id("transferInstructions") else {
            return;
        };
        if !visible {
            dom::set_display(&panel, "none");
            return;
        }
        dom::set_display(&panel, "block");
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        panel.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// `navigator.clipboard.writeText`, looked up at call time since insecure
/// origins don't expose it.
pub struct DomClipboard;

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = dom::window().navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

#[async_trait(?Send)]
impl Clipboard for DomClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        write_clipboard(text).await.map_err(|e| {
            gloo_console::error!("Copy failed:", e.clone());
            format!("{e:?}")
        })
    }
}

fn bank_of(item: &Element) -> BankAccount {
    BankAccount {
        name: dom::data(item, "bank").unwrap_or_default(),
        account_number: dom::data(item, "account").unwrap_or_default(),
        account_holder: dom::data(item, "holder").unwrap_or_default(),
    }
}

pub fn bind() {
    let items = dom::query_all(BANK_ITEM);
    if items.is_empty() {
        return;
    }
    let banks = items.iter().map(bank_of).collect();
    let selector = Rc::new(BankSelector::new(
        banks,
        Rc::new(DomTransfer {
            items: items.clone(),
        }),
        Rc::new(DomClipboard),
        state::notifier(),
    ));

    for (index, item) in items.iter().enumerate() {
        let selector = selector.clone();
        events::on(item, "click", move |e| {
            e.prevent_default();
            selector.select(index);
        });
    }

    if let Some(close) = dom::by_id("closeInstructions") {
        let selector = selector.clone();
        events::on(&close, "click", move |_| selector.close());
    }

    if let Some(copy) = dom::by_id("copyAccountNumber") {
        events::on_async(&copy, "click", move |_| {
            let selector = selector.clone();
            async move {
                let _ = selector.copy_account_number().await;
            }
        });
    }
}

//! Page-wide services.
//!
//! WASM is single-threaded, so the configuration and the notifier are
//! `thread_local!` singletons, created on first use and never torn down.

use std::cell::OnceCell;
use std::rc::Rc;

use sf_interactions::{ApiClient, StorefrontConfig};
use wasm_bindgen::JsValue;

use crate::api::FetchTransport;
use crate::dom;
use crate::toast::DomNotifier;

/// Optional page global carrying a JSON-shaped `StorefrontConfig`.
const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

thread_local! {
    static CONFIG: OnceCell<Rc<StorefrontConfig>> = const { OnceCell::new() };
    static NOTIFIER: OnceCell<Rc<DomNotifier>> = const { OnceCell::new() };
}

fn load_config() -> StorefrontConfig {
    let global = js_sys::Reflect::get(&dom::window(), &JsValue::from_str(CONFIG_GLOBAL))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    if let Some(value) = global {
        match serde_wasm_bindgen::from_value::<StorefrontConfig>(value) {
            Ok(config) => return config,
            Err(e) => gloo_console::warn!(format!("ignoring window.{CONFIG_GLOBAL}: {e}")),
        }
    }

    let mut config = StorefrontConfig::default();
    if let Some(base) = dom::document()
        .body()
        .and_then(|b| b.get_attribute("data-api-base"))
    {
        config.api_base = base.trim().to_owned();
    }
    config
}

pub fn config() -> Rc<StorefrontConfig> {
    CONFIG.with(|c| c.get_or_init(|| Rc::new(load_config())).clone())
}

pub fn notifier() -> Rc<DomNotifier> {
    NOTIFIER.with(|n| {
        n.get_or_init(|| Rc::new(DomNotifier::new(config().toast.into())))
            .clone()
    })
}

pub fn client() -> ApiClient {
    ApiClient::new(Rc::new(FetchTransport), config())
}

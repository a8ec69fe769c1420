//! Cart page controls and catalog add-to-cart.
//!
//! Each control goes idle → in flight → idle. A successful change reloads the
//! page, so nothing here survives a success. Two overlapping clicks both send;
//! whichever reply lands last wins on the server.

use std::rc::Rc;

use sf_api_types::{ApiReply, Endpoint, FIELD_ITEM_ID, FIELD_NOTE, FIELD_QUANTITY};
use tracing::debug;

use crate::client::{ApiClient, Fallback};
use crate::error::StorefrontError;
use crate::messages;
use crate::notify::{self, Notifier, ToastKind};
use crate::transport::ApiRequest;

/// Page-level effects the cart needs.
pub trait PageHost {
    fn reload(&self);
    fn set_cart_badge(&self, count: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increase,
    Decrease,
}

impl QuantityAction {
    /// `data-action`: only `increase` adds, anything else subtracts.
    pub fn from_attr(action: Option<&str>) -> Self {
        match action {
            Some("increase") => QuantityAction::Increase,
            _ => QuantityAction::Decrease,
        }
    }
}

/// Leading base-10 integer of `text`, ignoring surrounding whitespace, so
/// `"3 pcs"` reads as 3.
pub fn parse_quantity(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// Quantity after applying `action` to what the line currently displays.
pub fn next_quantity(displayed: Option<&str>, action: QuantityAction) -> Result<u32, StorefrontError> {
    let current = displayed
        .and_then(parse_quantity)
        .ok_or_else(|| StorefrontError::validation(messages::UNREADABLE_QUANTITY))?;
    let next = match action {
        QuantityAction::Increase => current.saturating_add(1),
        QuantityAction::Decrease => current.saturating_sub(1),
    };
    if next < 1 {
        return Err(StorefrontError::validation(messages::MIN_QUANTITY));
    }
    u32::try_from(next).map_err(|_| StorefrontError::validation(messages::UNREADABLE_QUANTITY))
}

fn require_item_id(item_id: Option<&str>) -> Result<&str, StorefrontError> {
    match item_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(StorefrontError::validation(messages::INVALID_ITEM)),
    }
}

const UPDATE: Fallback = Fallback {
    rejected: messages::UPDATE_REJECTED,
    network: messages::UPDATE_NETWORK,
};
const REMOVE: Fallback = Fallback {
    rejected: messages::REMOVE_REJECTED,
    network: messages::REMOVE_NETWORK,
};
const CLEAR: Fallback = Fallback {
    rejected: messages::CLEAR_REJECTED,
    network: messages::CLEAR_NETWORK,
};
const ADD: Fallback = Fallback {
    rejected: messages::ADD_REJECTED,
    network: messages::ADD_NETWORK,
};

pub struct CartController {
    client: ApiClient,
    notifier: Rc<dyn Notifier>,
    page: Rc<dyn PageHost>,
}

impl CartController {
    pub fn new(client: ApiClient, notifier: Rc<dyn Notifier>, page: Rc<dyn PageHost>) -> Self {
        Self {
            client,
            notifier,
            page,
        }
    }

    /// Quantity button on a cart line.
    pub async fn change_quantity(
        &self,
        item_id: Option<&str>,
        displayed: Option<&str>,
        action: QuantityAction,
    ) -> Result<u32, StorefrontError> {
        let result = async {
            let item_id = require_item_id(item_id)?;
            let quantity = next_quantity(displayed, action)?;
            let request = ApiRequest::form(
                Endpoint::CartUpdate,
                [(FIELD_ITEM_ID, item_id.to_owned()), (FIELD_QUANTITY, quantity.to_string())],
            );
            self.client.call(request, UPDATE).await?;
            Ok::<_, StorefrontError>(quantity)
        }
        .await;
        self.finish(result)
    }

    /// Remove form on a cart line.
    pub async fn remove_item(&self, item_id: Option<&str>) -> Result<(), StorefrontError> {
        let result = async {
            let item_id = require_item_id(item_id)?;
            let request = ApiRequest::form(Endpoint::CartRemove, [(FIELD_ITEM_ID, item_id.to_owned())]);
            self.client.call(request, REMOVE).await?;
            Ok::<_, StorefrontError>(())
        }
        .await;
        self.finish(result)
    }

    pub async fn clear(&self) -> Result<(), StorefrontError> {
        let request = ApiRequest::form(Endpoint::CartClear, std::iter::empty::<(&str, String)>());
        let result = self.client.call(request, CLEAR).await.map(drop);
        self.finish(result)
    }

    /// Persist a line note. Silent either way.
    pub async fn save_note(&self, item_id: &str, note: &str) {
        let item_id = item_id.trim();
        if item_id.is_empty() {
            return;
        }
        debug!(item_id, "saving cart note");
        let request = ApiRequest::form(
            Endpoint::CartUpdateNote,
            [(FIELD_ITEM_ID, item_id.to_owned()), (FIELD_NOTE, note.to_owned())],
        );
        self.client.fire(request).await;
    }

    /// Catalog "add to cart" button. `quantity` is the raw `data-quantity`,
    /// absent meaning one. Updates the badge instead of reloading.
    pub async fn add_item(&self, item_id: Option<&str>, quantity: Option<&str>) -> Result<ApiReply, StorefrontError> {
        let result = async {
            let item_id = require_item_id(item_id)?;
            let quantity = match quantity {
                None => 1,
                Some(raw) => parse_quantity(raw)
                    .filter(|q| *q >= 1)
                    .and_then(|q| u32::try_from(q).ok())
                    .ok_or_else(|| StorefrontError::validation(messages::MIN_QUANTITY))?,
            };
            let request = ApiRequest::form(
                Endpoint::CartAdd,
                [(FIELD_ITEM_ID, item_id.to_owned()), (FIELD_QUANTITY, quantity.to_string())],
            );
            let value = self.client.call(request, ADD).await?;
            Ok::<_, StorefrontError>(serde_json::from_value::<ApiReply>(value).unwrap_or_default())
        }
        .await;

        let reply = notify::report(self.notifier.as_ref(), result)?;
        let message = reply.message.as_deref().unwrap_or(messages::ADD_SUCCEEDED);
        self.notifier.notify(message, ToastKind::Success);
        if let Some(count) = reply.cart_item_count {
            self.page.set_cart_badge(count);
        }
        Ok(reply)
    }

    fn finish<T>(&self, result: Result<T, StorefrontError>) -> Result<T, StorefrontError> {
        let result = notify::report(self.notifier.as_ref(), result);
        if result.is_ok() {
            self.page.reload();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, RecordingNotifier, RecordingPage, ScriptedTransport};
    use crate::transport::RequestBody;

    fn controller(transport: &Rc<ScriptedTransport>) -> (CartController, Rc<RecordingNotifier>, Rc<RecordingPage>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let page = Rc::new(RecordingPage::default());
        let cart = CartController::new(testing::client(transport), notifier.clone(), page.clone());
        (cart, notifier, page)
    }

    #[test]
    fn quantity_parsing_reads_leading_integer() {
        assert_eq!(parse_quantity(" 3 "), Some(3));
        assert_eq!(parse_quantity("12 pcs"), Some(12));
        assert_eq!(parse_quantity("-2"), Some(-2));
        assert_eq!(parse_quantity("pcs"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-"), None);
    }

    #[test]
    fn unknown_action_decreases() {
        assert_eq!(QuantityAction::from_attr(Some("increase")), QuantityAction::Increase);
        assert_eq!(QuantityAction::from_attr(Some("decrease")), QuantityAction::Decrease);
        assert_eq!(QuantityAction::from_attr(None), QuantityAction::Decrease);
        assert_eq!(next_quantity(Some("2"), QuantityAction::Increase), Ok(3));
    }

    #[tokio::test]
    async fn decrease_at_one_never_reaches_the_network() {
        let transport = ScriptedTransport::json(r#"{"success":true}"#);
        let (cart, notifier, page) = controller(&transport);

        let err = cart
            .change_quantity(Some("item-1"), Some("1"), QuantityAction::Decrease)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(notifier.last(), testing::error(messages::MIN_QUANTITY));
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(page.reloads.get(), 0);
    }

    #[tokio::test]
    async fn missing_id_and_unreadable_quantity_are_rejected() {
        let transport = ScriptedTransport::json(r#"{"success":true}"#);
        let (cart, notifier, _) = controller(&transport);

        let err = cart.change_quantity(Some(""), Some("2"), QuantityAction::Increase).await;
        assert_eq!(err, Err(StorefrontError::validation(messages::INVALID_ITEM)));

        let err = cart.change_quantity(Some("item-1"), None, QuantityAction::Increase).await;
        assert_eq!(err, Err(StorefrontError::validation(messages::UNREADABLE_QUANTITY)));
        assert_eq!(notifier.shown.borrow().len(), 2);
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn successful_update_posts_form_and_reloads() -> anyhow::Result<()> {
        let transport = ScriptedTransport::json(r#"{"success":true,"message":"Kuantitas berhasil diperbarui"}"#);
        let (cart, notifier, page) = controller(&transport);

        let quantity = cart
            .change_quantity(Some("item-9"), Some("2"), QuantityAction::Increase)
            .await?;

        assert_eq!(quantity, 3);
        assert_eq!(page.reloads.get(), 1);
        assert!(notifier.is_empty());
        let (url, request) = transport.last().expect("request sent");
        assert_eq!(url, "/api/cart/update");
        assert_eq!(
            request.body,
            RequestBody::Form(vec![
                ("itemId".to_owned(), "item-9".to_owned()),
                ("quantity".to_owned(), "3".to_owned()),
            ])
        );
        Ok(())
    }

    #[tokio::test]
    async fn plain_text_reply_is_shown_as_failure() {
        let transport = ScriptedTransport::replying([Ok(crate::RawResponse::text(200, "OK"))]);
        let (cart, notifier, page) = controller(&transport);

        let err = cart.remove_item(Some("item-1")).await.unwrap_err();

        assert_eq!(err, StorefrontError::operation("OK"));
        assert_eq!(notifier.last(), testing::error("OK"));
        assert_eq!(page.reloads.get(), 0);
    }

    #[tokio::test]
    async fn rejection_without_message_uses_fallback() {
        let transport = ScriptedTransport::json(r#"{"success":false}"#);
        let (cart, notifier, _) = controller(&transport);

        cart.clear().await.unwrap_err();

        assert_eq!(notifier.last(), testing::error(messages::CLEAR_REJECTED));
        let (url, request) = transport.last().expect("request sent");
        assert_eq!(url, "/api/cart/clear");
        assert_eq!(request.body, RequestBody::Form(Vec::new()));
    }

    #[tokio::test]
    async fn network_error_uses_network_message() {
        let transport = ScriptedTransport::offline();
        let (cart, notifier, _) = controller(&transport);

        cart.remove_item(Some("item-1")).await.unwrap_err();

        assert_eq!(notifier.last(), testing::error(messages::REMOVE_NETWORK));
    }

    #[tokio::test]
    async fn note_is_saved_silently() {
        let transport = ScriptedTransport::offline();
        let (cart, notifier, page) = controller(&transport);

        cart.save_note("item-3", "tolong bungkus kado").await;
        cart.save_note("  ", "ignored").await;

        assert_eq!(transport.sent_count(), 1);
        let (url, request) = transport.last().expect("note sent");
        assert_eq!(url, "/api/cart/update-note");
        assert_eq!(request.field("note"), Some("tolong bungkus kado"));
        assert!(notifier.is_empty());
        assert_eq!(page.reloads.get(), 0);
    }

    #[tokio::test]
    async fn add_to_cart_updates_badge_without_reload() -> anyhow::Result<()> {
        let transport = ScriptedTransport::json(
            r#"{"success":true,"message":"Produk berhasil ditambahkan ke keranjang","cartItemCount":4}"#,
        );
        let (cart, notifier, page) = controller(&transport);

        let reply = cart.add_item(Some("sku-1"), None).await?;

        assert_eq!(reply.cart_item_count, Some(4));
        assert_eq!(page.badge.get(), Some(4));
        assert_eq!(page.reloads.get(), 0);
        assert_eq!(notifier.last(), testing::success(messages::ADD_SUCCEEDED));
        assert_eq!(transport.last().map(|(_, r)| r.field("quantity").map(str::to_owned)), Some(Some("1".to_owned())));
        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_reads_float_count_and_server_message() -> anyhow::Result<()> {
        let transport = ScriptedTransport::json(r#"{"success":true,"message":"Ditambahkan!","cartItemCount":4.0}"#);
        let (cart, notifier, page) = controller(&transport);

        cart.add_item(Some("sku-1"), Some("2")).await?;

        assert_eq!(page.badge.get(), Some(4));
        assert_eq!(notifier.last(), testing::success("Ditambahkan!"));
        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_rejects_bad_quantity() {
        let transport = ScriptedTransport::json(r#"{"success":true}"#);
        let (cart, notifier, page) = controller(&transport);

        let err = cart.add_item(Some("sku-1"), Some("0")).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(notifier.last(), testing::error(messages::MIN_QUANTITY));
        assert_eq!(page.badge.get(), None);
        assert_eq!(transport.sent_count(), 0);
    }
}

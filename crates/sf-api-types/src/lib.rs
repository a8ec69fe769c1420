use serde::{Deserialize, Serialize};

/// Backend endpoints consumed by the storefront pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CartAdd,
    CartUpdate,
    CartRemove,
    CartClear,
    CartUpdateNote,
    CheckoutCalculate,
    PaymentUpload,
}

/// How a request body is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    FormUrlEncoded,
    Multipart,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::CartAdd => "/api/cart/add",
            Endpoint::CartUpdate => "/api/cart/update",
            Endpoint::CartRemove => "/api/cart/remove",
            Endpoint::CartClear => "/api/cart/clear",
            Endpoint::CartUpdateNote => "/api/cart/update-note",
            Endpoint::CheckoutCalculate => "/api/checkout/calculate",
            Endpoint::PaymentUpload => "/api/payment/upload",
        }
    }

    /// Every endpoint is a POST; only the body encoding differs.
    pub fn encoding(self) -> BodyEncoding {
        match self {
            Endpoint::CheckoutCalculate | Endpoint::PaymentUpload => BodyEncoding::Multipart,
            _ => BodyEncoding::FormUrlEncoded,
        }
    }
}

// ── Form field names ──

pub const FIELD_ITEM_ID: &str = "itemId";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_NOTE: &str = "note";
pub const FIELD_COURIER: &str = "courier";
pub const FIELD_PAYMENT_PROOF: &str = "paymentProof";
pub const FIELD_BANK: &str = "bank";

// ── Replies ──

/// Any non-negative integral-valued number that fits a `u32`; anything else is
/// treated as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let count = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
            .map(|n| n as u64)
    });
    Ok(count.and_then(|n| u32::try_from(n).ok()))
}

/// Strings only; a field of any other type is treated as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Common reply of the cart and payment endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cart_item_count: Option<u32>,
    /// Sent by the add endpoint; the pages reload or re-render totals
    /// server-side, so nothing displays it yet.
    #[serde(default)]
    pub cart_total: Option<serde_json::Value>,
}

/// Reply of `/api/checkout/calculate`.
///
/// Amounts stay as raw JSON values; the page coerces them when formatting so a
/// malformed amount renders as zero instead of failing the whole reply. The
/// other fields are read leniently for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(default)]
    pub subtotal: serde_json::Value,
    #[serde(default)]
    pub shipping_cost: serde_json::Value,
    #[serde(default)]
    pub total_price: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub courier_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_endpoints() {
        assert_eq!(Endpoint::CheckoutCalculate.encoding(), BodyEncoding::Multipart);
        assert_eq!(Endpoint::PaymentUpload.encoding(), BodyEncoding::Multipart);
        assert_eq!(Endpoint::CartClear.encoding(), BodyEncoding::FormUrlEncoded);
        assert_eq!(Endpoint::CartUpdateNote.path(), "/api/cart/update-note");
    }

    #[test]
    fn reply_reads_camel_case_fields() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"success":true,"message":"ok","cartItemCount":3,"cartTotal":125000}"#,
        )
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.cart_item_count, Some(3));
        assert_eq!(reply.cart_total, Some(serde_json::json!(125000)));
    }

    #[test]
    fn summary_tolerates_missing_amounts() {
        let summary: OrderSummary =
            serde_json::from_str(r#"{"success":true,"subtotal":100000}"#).unwrap();
        assert_eq!(summary.subtotal, serde_json::json!(100000));
        assert!(summary.shipping_cost.is_null());
        assert!(summary.courier_name.is_none());
    }

    #[test]
    fn odd_field_types_do_not_discard_the_reply() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"success":true,"message":"Ditambahkan!","cartItemCount":4.0}"#,
        )
        .unwrap();
        assert_eq!(reply.message.as_deref(), Some("Ditambahkan!"));
        assert_eq!(reply.cart_item_count, Some(4));

        let reply: ApiReply =
            serde_json::from_str(r#"{"success":true,"message":42,"cartItemCount":-1}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, None);
        assert_eq!(reply.cart_item_count, None);

        let reply: ApiReply = serde_json::from_str(r#"{"success":true,"cartItemCount":2.5}"#).unwrap();
        assert_eq!(reply.cart_item_count, None);

        let summary: OrderSummary = serde_json::from_str(
            r#"{"success":true,"subtotal":100000,"courierName":7}"#,
        )
        .unwrap();
        assert_eq!(summary.subtotal, serde_json::json!(100000));
        assert_eq!(summary.courier_name, None);
    }
}

//! Checkout order summary, refreshed whenever the courier changes.

use std::rc::Rc;

use sf_api_types::{Endpoint, FIELD_COURIER, OrderSummary};

use crate::client::{ApiClient, Fallback};
use crate::currency::format_currency;
use crate::error::StorefrontError;
use crate::messages;
use crate::notify::{self, Notifier};
use crate::transport::{ApiRequest, Part};

const SUMMARY: Fallback = Fallback {
    rejected: messages::SUMMARY_REJECTED,
    network: messages::SUMMARY_NETWORK,
};

/// The three display strings of the summary box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSummary {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl FormattedSummary {
    pub fn from_summary(prefix: &str, summary: &OrderSummary) -> Self {
        Self {
            subtotal: format_currency(prefix, &summary.subtotal),
            shipping: format_currency(prefix, &summary.shipping_cost),
            total: format_currency(prefix, &summary.total_price),
        }
    }
}

pub trait SummaryView {
    fn render(&self, summary: &FormattedSummary);
}

pub struct CheckoutController {
    client: ApiClient,
    notifier: Rc<dyn Notifier>,
    view: Rc<dyn SummaryView>,
}

impl CheckoutController {
    pub fn new(client: ApiClient, notifier: Rc<dyn Notifier>, view: Rc<dyn SummaryView>) -> Self {
        Self {
            client,
            notifier,
            view,
        }
    }

    /// Recalculate for `courier`. On failure the previous summary stays.
    pub async fn refresh(&self, courier: &str) -> Result<FormattedSummary, StorefrontError> {
        let request = ApiRequest::multipart(
            Endpoint::CheckoutCalculate,
            vec![Part::text(FIELD_COURIER, courier)],
        );
        let result = self.client.call(request, SUMMARY).await.map(|value| {
            let summary: OrderSummary = serde_json::from_value(value).unwrap_or_default();
            FormattedSummary::from_summary(&self.client.config().currency_prefix, &summary)
        });
        let formatted = notify::report(self.notifier.as_ref(), result)?;
        self.view.render(&formatted);
        Ok(formatted)
    }
}

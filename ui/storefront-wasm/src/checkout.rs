//! Checkout summary box.

use std::rc::Rc;

use sf_interactions::checkout::{CheckoutController, FormattedSummary, SummaryView};

use crate::dom;
use crate::events;

pub struct DomSummary;

fn write_field(name: &str, text: &str) {
    if let Some(el) = dom::query(&format!("[data-summary=\"{name}\"]")) {
        dom::set_text(&el, text);
    }
}

impl SummaryView for DomSummary {
    fn render(&self, summary: &FormattedSummary) {
        write_field("subtotal", &summary.subtotal);
        write_field("shipping", &summary.shipping);
        write_field("total", &summary.total);
    }
}

fn refresh(checkout: Rc<CheckoutController>, courier: String) {
    events::spawn(async move {
        let _ = checkout.refresh(&courier).await;
    });
}

/// Recalculate once on load, then on every courier change.
pub fn bind(checkout: Rc<CheckoutController>) {
    let Some(courier) = dom::by_id("courier") else {
        return;
    };

    refresh(checkout.clone(), dom::value(&courier).unwrap_or_default());

    let el = courier.clone();
    events::on(&courier, "change", move |_| {
        refresh(checkout.clone(), dom::value(&el).unwrap_or_default());
    });
}

//! Runs the controllers against a real storefront backend.
//!
//! Skipped unless `STOREFRONT_TEST_URL` points at a running server.

use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use sf_interactions::checkout::{CheckoutController, FormattedSummary, SummaryView};
use sf_interactions::native::{ReqwestTransport, config_from_env};
use sf_interactions::{ApiClient, Notifier, StorefrontError, ToastKind};

#[derive(Default)]
struct Toasts(RefCell<Vec<(String, ToastKind)>>);

impl Notifier for Toasts {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.0.borrow_mut().push((message.to_owned(), kind));
    }
}

#[derive(Default)]
struct Summary(RefCell<Option<FormattedSummary>>);

impl SummaryView for Summary {
    fn render(&self, summary: &FormattedSummary) {
        *self.0.borrow_mut() = Some(summary.clone());
    }
}

fn setup_client() -> anyhow::Result<Option<ApiClient>> {
    let base = match env::var("STOREFRONT_TEST_URL") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let transport = ReqwestTransport::new()?;
    let config = config_from_env(Some(base));
    Ok(Some(ApiClient::new(Rc::new(transport), Rc::new(config))))
}

#[tokio::test]
async fn checkout_with_empty_session_cart_is_rejected() -> anyhow::Result<()> {
    let Some(client) = setup_client()? else {
        return Ok(());
    };
    let toasts = Rc::new(Toasts::default());
    let summary = Rc::new(Summary::default());
    let checkout = CheckoutController::new(client, toasts.clone(), summary.clone());

    let err = checkout
        .refresh("jne")
        .await
        .expect_err("a fresh session has no cart to price");

    assert!(matches!(err, StorefrontError::Operation(_)));
    assert_eq!(toasts.0.borrow().len(), 1);
    assert_eq!(toasts.0.borrow()[0].1, ToastKind::Error);
    assert!(summary.0.borrow().is_none());
    Ok(())
}

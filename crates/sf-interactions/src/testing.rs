//! Test doubles shared by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::cart::PageHost;
use crate::client::ApiClient;
use crate::config::StorefrontConfig;
use crate::error::TransportError;
use crate::notify::{Notifier, ToastKind};
use crate::transport::{ApiRequest, RawResponse, Transport};

/// Replays queued replies in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    pub sent: RefCell<Vec<(String, ApiRequest)>>,
}

impl ScriptedTransport {
    pub fn replying(replies: impl IntoIterator<Item = Result<RawResponse, TransportError>>) -> Rc<Self> {
        Rc::new(Self {
            replies: RefCell::new(replies.into_iter().collect()),
            sent: RefCell::default(),
        })
    }

    pub fn json(body: &str) -> Rc<Self> {
        Self::replying([Ok(RawResponse::json(200, body))])
    }

    pub fn offline() -> Rc<Self> {
        Self::replying([Err(TransportError::Network("connection refused".to_owned()))])
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn last(&self) -> Option<(String, ApiRequest)> {
        self.sent.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push((url.to_owned(), request.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<(String, ToastKind)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(String, ToastKind)> {
        self.shown.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        if !message.is_empty() {
            self.shown.borrow_mut().push((message.to_owned(), kind));
        }
    }
}

#[derive(Default)]
pub struct RecordingPage {
    pub reloads: Cell<u32>,
    pub badge: Cell<Option<u32>>,
}

impl PageHost for RecordingPage {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn set_cart_badge(&self, count: u32) {
        self.badge.set(Some(count));
    }
}

pub fn client(transport: &Rc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(transport.clone(), Rc::new(StorefrontConfig::default()))
}

pub fn error(message: &str) -> Option<(String, ToastKind)> {
    Some((message.to_owned(), ToastKind::Error))
}

pub fn success(message: &str) -> Option<(String, ToastKind)> {
    Some((message.to_owned(), ToastKind::Success))
}

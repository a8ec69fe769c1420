//! Request dispatch shared by the controllers.

use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::response::parse_response;
use crate::transport::{ApiRequest, Transport};

/// Messages used when the reply itself does not explain the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// Rejected or unreadable reply without a message of its own.
    pub rejected: &'static str,
    /// The request never produced a reply.
    pub network: &'static str,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    config: Rc<StorefrontConfig>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, config: Rc<StorefrontConfig>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Send `request` and return the reply object of an explicit success.
    pub async fn call(&self, request: ApiRequest, fallback: Fallback) -> Result<Value, StorefrontError> {
        let url = self.config.url(request.endpoint);
        debug!(%url, "dispatching storefront request");

        let raw = match self.transport.send(&url, &request).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%url, error = %err, "storefront request failed");
                return Err(StorefrontError::operation(fallback.network));
            }
        };

        let result = parse_response(&raw).into_result(fallback.rejected);
        if let Err(err) = &result {
            warn!(%url, status = raw.status, reason = err.message(), "storefront request rejected");
        }
        result
    }

    /// Send `request` and ignore whatever happens.
    pub async fn fire(&self, request: ApiRequest) {
        let url = self.config.url(request.endpoint);
        match self.transport.send(&url, &request).await {
            Ok(raw) => debug!(%url, status = raw.status, "fire-and-forget request sent"),
            Err(err) => debug!(%url, error = %err, "fire-and-forget request failed"),
        }
    }
}

//! Page configuration.
//!
//! Every field has a default, so a page that ships no configuration at all
//! behaves like the stock storefront. The wasm front end fills this from
//! `window.STOREFRONT_CONFIG`; the native transport reads its base URL from
//! the environment.

use serde::{Deserialize, Serialize};
use sf_api_types::Endpoint;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const DEFAULT_UPLOAD_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "application/pdf"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Prefix joined in front of every endpoint path. Empty means same origin.
    pub api_base: String,
    pub max_upload_bytes: u64,
    pub allowed_upload_types: Vec<String>,
    pub currency_prefix: String,
    pub toast: ToastTimings,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_upload_types: DEFAULT_UPLOAD_TYPES.iter().map(|t| (*t).to_owned()).collect(),
            currency_prefix: "Rp ".to_owned(),
            toast: ToastTimings::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint.path())
    }

    pub fn allows_upload_type(&self, mime_type: &str) -> bool {
        self.allowed_upload_types.iter().any(|t| t == mime_type)
    }

    /// Upload ceiling in whole MiB, for messages.
    pub fn max_upload_mib(&self) -> u64 {
        self.max_upload_bytes / (1024 * 1024)
    }
}

/// Toast animation schedule, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTimings {
    /// Delay between insertion and the "show" class, so the CSS transition runs.
    pub enter_delay_ms: u32,
    pub display_ms: u32,
    /// Time the exit transition gets before the element is detached.
    pub exit_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            display_ms: 3_000,
            exit_ms: 300,
        }
    }
}

//! Storefront page interactions.
//!
//! Platform-neutral behaviour behind the storefront's browser layer: response
//! parsing, client-side validation, currency formatting and one controller per
//! page component. Controllers only see the world through the traits in
//! [`transport`], [`notify`] and the per-component view traits, so the wasm
//! front end and the tests plug in their own implementations.

pub mod badge;
pub mod cart;
pub mod checkout;
pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod messages;
pub mod notify;
pub mod response;
pub mod transfer;
pub mod transport;
pub mod upload;

#[cfg(feature = "native")]
pub mod native;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, Fallback};
pub use config::{StorefrontConfig, ToastTimings};
pub use error::{StorefrontError, TransportError};
pub use notify::{Notifier, ToastKind};
pub use response::{ResponseOutcome, parse_response};
pub use transport::{ApiRequest, Part, RawResponse, RequestBody, Transport};

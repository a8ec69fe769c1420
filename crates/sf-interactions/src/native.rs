//! `reqwest` transport for running the controllers outside a browser.
//!
//! Keeps a cookie store so consecutive calls share one backend session, the
//! same way same-origin `fetch` with credentials does on the page.

use async_trait::async_trait;
use reqwest::multipart;

use crate::config::StorefrontConfig;
use crate::error::TransportError;
use crate::transport::{ApiRequest, Part, RawResponse, RequestBody, Transport};

pub const API_BASE_ENV: &str = "STOREFRONT_API_BASE";

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { http })
    }
}

/// Configuration whose base URL is `base`, or `STOREFRONT_API_BASE`, or
/// `http://localhost:7070`.
pub fn config_from_env(base: Option<String>) -> StorefrontConfig {
    let base = base
        .or_else(|| std::env::var(API_BASE_ENV).ok())
        .unwrap_or_else(|| "http://localhost:7070".to_owned());
    StorefrontConfig::default().with_api_base(base.trim_end_matches('/'))
}

fn multipart_form(parts: &[Part]) -> Result<multipart::Form, TransportError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name.clone(), value.clone()),
            Part::File { name, file } => {
                let body = multipart::Part::bytes(file.content.clone())
                    .file_name(file.meta.name.clone())
                    .mime_str(&file.meta.mime_type)
                    .map_err(|e| TransportError::Request(e.to_string()))?;
                form.part(name.clone(), body)
            }
        };
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let builder = self.http.post(url);
        let builder = match &request.body {
            RequestBody::Form(pairs) => builder.form(pairs),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

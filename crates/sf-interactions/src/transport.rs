//! HTTP transport seam.
//!
//! Controllers describe a request as an [`ApiRequest`]; a [`Transport`] turns
//! it into bytes on the wire. The browser build uses `fetch`, the `native`
//! feature provides a `reqwest` implementation, and tests script replies.

use async_trait::async_trait;
use sf_api_types::Endpoint;

use crate::error::TransportError;
use crate::upload::UploadFile;

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` pairs, in order. May be empty.
    Form(Vec<(String, String)>),
    Multipart(Vec<Part>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn form<'a>(endpoint: Endpoint, pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        Self {
            endpoint,
            body: RequestBody::Form(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.to_owned(), v))
                    .collect(),
            ),
        }
    }

    pub fn multipart(endpoint: Endpoint, parts: Vec<Part>) -> Self {
        Self {
            endpoint,
            body: RequestBody::Multipart(parts),
        }
    }

    /// Value of a text field, whichever encoding carries it.
    pub fn field(&self, name: &str) -> Option<&str> {
        match &self.body {
            RequestBody::Form(pairs) => pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            RequestBody::Multipart(parts) => parts.iter().find_map(|p| match p {
                Part::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            }),
        }
    }
}

impl Part {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Part::Text {
            name: name.to_owned(),
            value: value.into(),
        }
    }

    pub fn file(name: &str, file: UploadFile) -> Self {
        Part::File {
            name: name.to_owned(),
            file,
        }
    }
}

/// What came back, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_owned()),
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }
}

/// Sends one POST to `url`. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

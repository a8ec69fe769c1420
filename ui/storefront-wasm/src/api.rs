//! `fetch` transport.
//!
//! Requests are same-origin with credentials so the backend session cookie
//! travels with them. Form bodies go out url-encoded, everything else as
//! `multipart/form-data` built from a `FormData`.

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use sf_interactions::upload::UploadFile;
use sf_interactions::{ApiRequest, Part, RawResponse, RequestBody, Transport, TransportError};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials, UrlSearchParams};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct FetchTransport;

fn js_error(e: JsValue) -> TransportError {
    TransportError::Request(format!("{e:?}"))
}

fn url_params(pairs: &[(String, String)]) -> Result<UrlSearchParams, TransportError> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (key, value) in pairs {
        params.append(key, value);
    }
    Ok(params)
}

fn blob(file: &UploadFile) -> Result<Blob, TransportError> {
    let bytes = Uint8Array::from(file.content.as_slice());
    let bag = BlobPropertyBag::new();
    bag.set_type(&file.meta.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &bag).map_err(js_error)
}

fn form_data(parts: &[Part]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
            Part::File { name, file } => form
                .append_with_blob_and_filename(name, &blob(file)?, &file.meta.name)
                .map_err(js_error)?,
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let builder = Request::post(url).credentials(RequestCredentials::SameOrigin);
        let built = match &request.body {
            RequestBody::Form(pairs) => builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(url_params(pairs)?),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
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

//! Payment-proof upload: validation gate, preview, multipart submission.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use sf_api_types::{Endpoint, FIELD_BANK, FIELD_PAYMENT_PROOF};
use tracing::warn;

use crate::client::{ApiClient, Fallback};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::messages;
use crate::notify::{self, Notifier, ToastKind};
use crate::transport::{ApiRequest, Part};

pub const DROPZONE_ACTIVE_CLASS: &str = "upload-dropzone--active";

const UPLOAD: Fallback = Fallback {
    rejected: messages::UPLOAD_REJECTED,
    network: messages::UPLOAD_NETWORK,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// A validated file with its content, ready to attach to a request.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub meta: FileMeta,
    pub content: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("meta", &self.meta)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// A file picked or dropped by the user, not yet read.
#[async_trait(?Send)]
pub trait FileHandle {
    fn meta(&self) -> FileMeta;
    async fn read(&self) -> Result<Vec<u8>, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// `data:` URL for an inline `<img>`.
    Image(String),
    /// Non-image files show their name only.
    Document(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Disabled,
    Ready,
    Busy,
}

impl SubmitButton {
    pub fn label(self) -> Option<&'static str> {
        match self {
            SubmitButton::Disabled => None,
            SubmitButton::Ready => Some(messages::UPLOAD_IDLE_LABEL),
            SubmitButton::Busy => Some(messages::UPLOAD_BUSY_LABEL),
        }
    }

    pub fn disabled(self) -> bool {
        !matches!(self, SubmitButton::Ready)
    }
}

pub trait UploadView {
    /// Hide the dropzone and show the preview area.
    fn show_preview(&self, preview: &Preview);
    /// Back to the empty state: input cleared, dropzone shown, preview hidden.
    fn reset(&self);
    fn set_dropzone_active(&self, active: bool);
    fn set_submit(&self, state: SubmitButton);
    /// Replace the form body with the success panel.
    fn show_success(&self);
}

/// Client-side gate: presence, size ceiling, MIME allow-list.
pub fn validate_file(config: &StorefrontConfig, meta: Option<&FileMeta>) -> Result<(), StorefrontError> {
    let Some(meta) = meta else {
        return Err(StorefrontError::validation(messages::FILE_MISSING));
    };
    if meta.size > config.max_upload_bytes {
        return Err(StorefrontError::validation(messages::file_too_large(config.max_upload_mib())));
    }
    if !config.allows_upload_type(&meta.mime_type) {
        return Err(StorefrontError::validation(messages::FILE_TYPE_REJECTED));
    }
    Ok(())
}

pub fn data_url(mime_type: &str, content: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(content))
}

pub fn preview_for(file: &UploadFile) -> Preview {
    if file.meta.is_image() {
        Preview::Image(data_url(&file.meta.mime_type, &file.content))
    } else {
        Preview::Document(file.meta.name.clone())
    }
}

/// True when the upload never got a reply, as opposed to a server rejection.
pub fn is_request_failure(err: &StorefrontError) -> bool {
    matches!(err, StorefrontError::Operation(reason) if reason == messages::UPLOAD_NETWORK)
}

pub struct UploadController {
    client: ApiClient,
    notifier: Rc<dyn Notifier>,
    view: Rc<dyn UploadView>,
    selected: RefCell<Option<UploadFile>>,
}

impl UploadController {
    pub fn new(client: ApiClient, notifier: Rc<dyn Notifier>, view: Rc<dyn UploadView>) -> Self {
        Self {
            client,
            notifier,
            view,
            selected: RefCell::new(None),
        }
    }

    pub fn has_file(&self) -> bool {
        self.selected.borrow().is_some()
    }

    /// File input change or drop. Rejected files are never read.
    pub async fn select_file(&self, file: Option<&dyn FileHandle>) -> Result<Preview, StorefrontError> {
        let result = async {
            let meta = file.map(|f| f.meta());
            validate_file(self.client.config(), meta.as_ref())?;
            let (Some(file), Some(meta)) = (file, meta) else {
                return Err(StorefrontError::validation(messages::FILE_MISSING));
            };
            let content = file.read().await.map_err(|reason| {
                warn!(%reason, name = %meta.name, "reading selected file failed");
                StorefrontError::operation(messages::FILE_UNREADABLE)
            })?;
            Ok::<_, StorefrontError>(UploadFile { meta, content })
        }
        .await;

        let file = notify::report(self.notifier.as_ref(), result)?;
        let preview = preview_for(&file);
        self.view.show_preview(&preview);
        self.view.set_submit(SubmitButton::Ready);
        *self.selected.borrow_mut() = Some(file);
        Ok(preview)
    }

    pub fn remove_file(&self) {
        self.selected.borrow_mut().take();
        self.view.reset();
        self.view.set_submit(SubmitButton::Disabled);
    }

    pub fn drag_over(&self) {
        self.view.set_dropzone_active(true);
    }

    pub fn drag_leave(&self) {
        self.view.set_dropzone_active(false);
    }

    /// Form submission with the bank chosen in `#bankSelect`.
    pub async fn submit(&self, bank: &str) -> Result<(), StorefrontError> {
        let bank = bank.trim();
        let file = if bank.is_empty() {
            Err(StorefrontError::validation(messages::SELECT_BANK_FIRST))
        } else {
            self.selected
                .borrow()
                .clone()
                .ok_or_else(|| StorefrontError::validation(messages::SELECT_FILE_FIRST))
        };
        let file = notify::report(self.notifier.as_ref(), file)?;

        self.view.set_submit(SubmitButton::Busy);
        let request = ApiRequest::multipart(
            Endpoint::PaymentUpload,
            vec![Part::file(FIELD_PAYMENT_PROOF, file), Part::text(FIELD_BANK, bank)],
        );
        match self.client.call(request, UPLOAD).await {
            Ok(_) => {
                self.view.show_success();
                self.notifier.notify(messages::UPLOAD_SUCCEEDED, ToastKind::Success);
                Ok(())
            }
            Err(err) => {
                self.view.set_submit(SubmitButton::Ready);
                notify::report(self.notifier.as_ref(), Err(err))
            }
        }
    }
}

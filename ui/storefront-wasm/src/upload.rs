//! Payment-proof upload page.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Uint8Array;
use sf_interactions::upload::{
    DROPZONE_ACTIVE_CLASS, FileHandle, FileMeta, Preview, SubmitButton, UploadController, UploadView,
    is_request_failure,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Element, File, FileList, HtmlButtonElement, HtmlImageElement, HtmlInputElement};

use crate::dom;
use crate::events;
use crate::state;

/// A `File` from the input or a drop.
struct BrowserFile(File);

#[async_trait(?Send)]
impl FileHandle for BrowserFile {
    fn meta(&self) -> FileMeta {
        FileMeta {
            name: self.0.name(),
            size: self.0.size() as u64,
            mime_type: self.0.type_(),
        }
    }

    async fn read(&self) -> Result<Vec<u8>, String> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| format!("{e:?}"))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

fn first_file(files: Option<FileList>) -> Option<BrowserFile> {
    files.and_then(|list| list.get(0)).map(BrowserFile)
}

pub struct DomUploadView {
    dropzone: Element,
    input: HtmlInputElement,
    preview_area: Option<Element>,
    preview_image: Option<HtmlImageElement>,
    preview_file: Option<Element>,
    file_name: Option<Element>,
    submit: Option<HtmlButtonElement>,
}

impl DomUploadView {
    fn find() -> Option<Self> {
        Some(Self {
            dropzone: dom::by_id("dropzone")?,
            input: dom::by_id_typed("paymentProof")?,
            preview_area: dom::by_id("previewArea"),
            preview_image: dom::by_id_typed("previewImage"),
            preview_file: dom::by_id("previewFile"),
            file_name: dom::by_id("fileName"),
            submit: dom::by_id_typed("submitBtn"),
        })
    }
}

impl UploadView for DomUploadView {
    fn show_preview(&self, preview: &Preview) {
        if let Some(area) = &self.preview_area {
            dom::set_display(area, "block");
        }
        dom::set_display(&self.dropzone, "none");

        match preview {
            Preview::Image(url) => {
                if let Some(img) = &self.preview_image {
                    img.set_src(url);
                    dom::set_display(img, "block");
                }
                if let Some(file) = &self.preview_file {
                    dom::set_display(file, "none");
                }
            }
            Preview::Document(name) => {
                if let Some(img) = &self.preview_image {
                    dom::set_display(img, "none");
                }
                if let Some(file) = &self.preview_file {
                    dom::set_display(file, "flex");
                }
                if let Some(label) = &self.file_name {
                    dom::set_text(label, name);
                }
            }
        }
    }

    fn reset(&self) {
        self.input.set_value("");
        if let Some(area) = &self.preview_area {
            dom::set_display(area, "none");
        }
        dom::set_display(&self.dropzone, "flex");
        if let Some(img) = &self.preview_image {
            img.set_src("");
        }
    }

    fn set_dropzone_active(&self, active: bool) {
        dom::toggle_class(&self.dropzone, DROPZONE_ACTIVE_CLASS, active);
    }

    fn set_submit(&self, state: SubmitButton) {
        let Some(button) = &self.submit else {
            return;
        };
        button.set_disabled(state.disabled());
        if let Some(label) = state.label() {
            dom::set_text(button, label);
        }
    }

    fn show_success(&self) {
        let (Some(body), Some(success)) = (dom::query(".upload-card__body"), dom::by_id("successMessage"))
        else {
            return;
        };
        body.set_inner_html(&success.outer_html());
        if let Some(shown) = dom::by_id("successMessage") {
            dom::set_display(&shown, "block");
        }
    }
}

fn select(upload: Rc<UploadController>, file: Option<BrowserFile>) {
    events::spawn(async move {
        let _ = upload
            .select_file(file.as_ref().map(|f| f as &dyn FileHandle))
            .await;
    });
}

pub fn bind() {
    let Some(view) = DomUploadView::find() else {
        if dom::by_id("uploadForm").is_some() {
            gloo_console::error!("Required elements not found");
        }
        return;
    };
    let dropzone = view.dropzone.clone();
    let input = view.input.clone();
    let upload = Rc::new(UploadController::new(state::client(), state::notifier(), Rc::new(view)));

    {
        let upload = upload.clone();
        let el = input.clone();
        events::on(&input, "change", move |_| {
            if let Some(file) = first_file(el.files()) {
                select(upload.clone(), Some(file));
            }
        });
    }

    {
        let upload = upload.clone();
        events::on(&dropzone, "dragover", move |e| {
            e.prevent_default();
            upload.drag_over();
        });
    }

    {
        let upload = upload.clone();
        events::on(&dropzone, "dragleave", move |e| {
            e.prevent_default();
            upload.drag_leave();
        });
    }

    {
        let upload = upload.clone();
        events::on(&dropzone, "drop", move |e| {
            e.prevent_default();
            upload.drag_leave();
            let files = e
                .dyn_ref::<DragEvent>()
                .and_then(|d| d.data_transfer())
                .and_then(|t| t.files());
            let Some(files) = files.filter(|f| f.length() > 0) else {
                return;
            };
            input.set_files(Some(&files));
            select(upload.clone(), first_file(Some(files)));
        });
    }

    if let Some(remove) = dom::by_id("removeFile") {
        let upload = upload.clone();
        events::on(&remove, "click", move |_| upload.remove_file());
    }

    if let Some(form) = dom::by_id("uploadForm") {
        events::on_async(&form, "submit", move |_| {
            let upload = upload.clone();
            let bank = dom::by_id("bankSelect")
                .and_then(|s| dom::value(&s))
                .unwrap_or_default();
            async move {
                if let Err(err) = upload.submit(&bank).await
                    && is_request_failure(&err)
                {
                    gloo_console::error!("Upload error:", err.to_string());
                }
            }
        });
    }
}

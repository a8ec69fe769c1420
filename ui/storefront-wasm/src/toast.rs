//! Toast notifications in the page.
//!
//! One `#toast-container` per page, created the first time a toast is shown.
//! Toasts stack; each one runs its own show/hide/remove timers.

use gloo_timers::callback::Timeout;
use sf_interactions::notify::{CONTAINER_CLASS, CONTAINER_ID, SHOW_CLASS, Toast, ToastSchedule};
use sf_interactions::{Notifier, ToastKind};
use std::time::Duration;
use web_sys::Element;

use crate::dom;

pub struct DomNotifier {
    schedule: ToastSchedule,
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

fn ensure_container() -> Option<Element> {
    if let Some(existing) = dom::by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let container = dom::create_element("div")?;
    container.set_id(CONTAINER_ID);
    container.set_class_name(CONTAINER_CLASS);
    dom::document().body()?.append_child(&container).ok()?;
    Some(container)
}

impl DomNotifier {
    pub fn new(schedule: ToastSchedule) -> Self {
        Self { schedule }
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        let Some(toast) = Toast::new(message, kind) else {
            return;
        };
        let Some(container) = ensure_container() else {
            return;
        };
        let Some(el) = dom::create_element("div") else {
            return;
        };
        el.set_class_name(&toast.class_name());
        dom::set_text(&el, &toast.message);
        if container.append_child(&el).is_err() {
            return;
        }

        let shown = el.clone();
        Timeout::new(millis(self.schedule.show_after), move || {
            dom::add_class(&shown, SHOW_CLASS);
        })
        .forget();

        let hidden = el.clone();
        Timeout::new(millis(self.schedule.hide_after), move || {
            dom::remove_class(&hidden, SHOW_CLASS);
        })
        .forget();

        Timeout::new(millis(self.schedule.remove_after), move || el.remove()).forget();
    }
}

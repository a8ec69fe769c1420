//! Bank-transfer destination picker on the payment page. No network calls.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::StorefrontError;
use crate::messages;
use crate::notify::{self, Notifier, ToastKind};

pub const ACTIVE_CLASS: &str = "bank-item--active";

/// One `.bank-item`, read from its `data-bank`, `data-account` and
/// `data-holder` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankAccount {
    pub name: String,
    pub account_number: String,
    pub account_holder: String,
}

impl BankAccount {
    pub fn holder_line(&self) -> String {
        format!("{}{}", messages::ACCOUNT_HOLDER_PREFIX, self.account_holder)
    }
}

pub trait TransferView {
    /// Fill the bank name, account number, holder and step fields.
    fn show_bank(&self, bank: &BankAccount);
    fn set_active(&self, index: usize, active: bool);
    /// Shows and scrolls into view, or hides, the instructions panel.
    fn set_instructions_visible(&self, visible: bool);
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

pub struct BankSelector {
    banks: Vec<BankAccount>,
    selected: Cell<Option<usize>>,
    view: Rc<dyn TransferView>,
    clipboard: Rc<dyn Clipboard>,
    notifier: Rc<dyn Notifier>,
}

impl BankSelector {
    pub fn new(
        banks: Vec<BankAccount>,
        view: Rc<dyn TransferView>,
        clipboard: Rc<dyn Clipboard>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            banks,
            selected: Cell::new(None),
            view,
            clipboard,
            notifier,
        }
    }

    pub fn selected(&self) -> Option<&BankAccount> {
        self.selected.get().and_then(|i| self.banks.get(i))
    }

    /// Click on the bank item at `index`. Out-of-range clicks are ignored.
    pub fn select(&self, index: usize) -> Option<&BankAccount> {
        let bank = self.banks.get(index)?;
        self.view.show_bank(bank);
        self.selected.set(Some(index));
        self.clear_active();
        self.view.set_active(index, true);
        self.view.set_instructions_visible(true);
        Some(bank)
    }

    /// Hide the panel. The last selection stays copyable.
    pub fn close(&self) {
        self.view.set_instructions_visible(false);
        self.clear_active();
    }

    pub async fn copy_account_number(&self) -> Result<(), StorefrontError> {
        let Some(account) = self
            .selected()
            .map(|b| b.account_number.clone())
            .filter(|a| !a.is_empty())
        else {
            return notify::report(
                self.notifier.as_ref(),
                Err(StorefrontError::validation(messages::SELECT_BANK_FIRST)),
            );
        };

        match self.clipboard.write_text(&account).await {
            Ok(()) => {
                self.notifier.notify(messages::COPY_SUCCEEDED, ToastKind::Success);
                Ok(())
            }
            Err(reason) => {
                warn!(%reason, "clipboard write failed");
                notify::report(
                    self.notifier.as_ref(),
                    Err(StorefrontError::operation(messages::COPY_FAILED)),
                )
            }
        }
    }

    fn clear_active(&self) {
        for i in 0..self.banks.len() {
            self.view.set_active(i, false);
        }
    }
}

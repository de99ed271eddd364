//! Account picker shown at the top of the dashboard.

use super::accounts_model::Account;
use crate::errors::{Error, Result};
use crate::ui::Disclosure;

/// Selected account plus the create-account dialog trigger.
#[derive(Debug, Clone, Default)]
pub struct AccountSwitcher {
    accounts: Vec<Account>,
    active_id: Option<String>,
    create_dialog: Disclosure,
}

impl AccountSwitcher {
    /// The first account starts out active.
    pub fn new(accounts: Vec<Account>) -> Self {
        let active_id = accounts.first().map(|account| account.id.clone());
        Self {
            accounts,
            active_id,
            create_dialog: Disclosure::default(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Replaces the list after a refetch. The active account is kept while it
    /// still exists, otherwise the first account becomes active.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        let still_present = self
            .active_id
            .as_deref()
            .is_some_and(|id| accounts.iter().any(|account| account.id == id));
        if !still_present {
            self.active_id = accounts.first().map(|account| account.id.clone());
        }
        self.accounts = accounts;
    }

    pub fn active(&self) -> Option<&Account> {
        let id = self.active_id.as_deref()?;
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn select(&mut self, account_id: &str) -> Result<&Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.id == account_id)
            .ok_or_else(|| Error::NotFound(format!("Account {}", account_id)))?;
        self.active_id = Some(account_id.to_string());
        Ok(&self.accounts[index])
    }

    /// Keyboard hint for the entry at `index` ("⌘1", "⌘2", ...).
    pub fn shortcut(index: usize) -> String {
        format!("⌘{}", index + 1)
    }

    pub fn create_dialog(&self) -> &Disclosure {
        &self.create_dialog
    }

    pub fn create_dialog_mut(&mut self) -> &mut Disclosure {
        &mut self.create_dialog
    }
}

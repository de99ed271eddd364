//! Accounts module - domain models, services, form state and traits.

mod account_dialog;
mod account_form;
mod account_switcher;
mod accounts_model;
mod accounts_schema;
mod accounts_service;
mod accounts_traits;

#[cfg(test)]
mod accounts_model_tests;

#[cfg(test)]
mod accounts_form_tests;


// Re-export the public interface
pub use account_dialog::{CreateAccountDialog, SubmitOutcome, SubmitPolicy};
pub use account_form::{AccountForm, AmountField};
pub use account_switcher::AccountSwitcher;
pub use accounts_model::{Account, AccountUpdate, NewAccount};
pub use accounts_schema::{fields, validate_create_account, AccountFormValues, ValidatedAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};

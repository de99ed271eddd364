//! Create-account dialog.
//!
//! The dialog does not own its visibility: the parent passes a callback and
//! is told whenever the dialog wants to open or close.

use std::sync::Arc;

use log::{debug, warn};

use super::account_form::AccountForm;
use super::accounts_model::Account;
use super::accounts_traits::AccountServiceTrait;
use crate::errors::{Error, Result};

/// What happens to the dialog once a valid draft is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Wait for the server. The dialog closes on success and keeps the draft
    /// on failure so it can be corrected and resubmitted.
    #[default]
    AwaitConfirmation,
    /// Dispatch the create in the background and close right away. A failed
    /// create is only reported by the store's notification.
    FireAndForget,
}

/// Result of a submit that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Account),
    Dispatched,
}

pub struct CreateAccountDialog {
    form: AccountForm,
    policy: SubmitPolicy,
    on_open_change: Box<dyn FnMut(bool) + Send>,
}

impl CreateAccountDialog {
    pub fn new(on_open_change: impl FnMut(bool) + Send + 'static) -> Self {
        Self {
            form: AccountForm::new(),
            policy: SubmitPolicy::default(),
            on_open_change: Box::new(on_open_change),
        }
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn form(&self) -> &AccountForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AccountForm {
        &mut self.form
    }

    /// Forwards an open/close request to the parent and clears the draft.
    pub fn open_change(&mut self, open: bool) {
        (self.on_open_change)(open);
        self.form.reset();
    }

    pub fn close(&mut self) {
        self.open_change(false);
    }

    /// Validates the draft and hands it to the account service.
    ///
    /// Validation failures never reach the service: they stay on the form and
    /// are returned as [`Error::Validation`].
    pub async fn submit(&mut self, service: Arc<dyn AccountServiceTrait>) -> Result<SubmitOutcome> {
        let payload = self.form.to_payload().map_err(|errors| {
            debug!("create account rejected: {}", errors);
            Error::from(errors)
        })?;

        match self.policy {
            SubmitPolicy::AwaitConfirmation => {
                let account = service.create_account(payload).await?;
                self.close();
                Ok(SubmitOutcome::Created(account))
            }
            SubmitPolicy::FireAndForget => {
                let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
                    Error::Unexpected(format!("No async runtime to dispatch create: {}", e))
                })?;
                runtime.spawn(async move {
                    if let Err(e) = service.create_account(payload).await {
                        warn!("background account create failed: {}", e);
                    }
                });
                self.close();
                Ok(SubmitOutcome::Dispatched)
            }
        }
    }
}

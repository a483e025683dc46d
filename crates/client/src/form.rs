//! State controller behind the "Set Password" page.
//!
//! The form moves through `Idle → Submitting → (Navigated | Idle)`.
//! `Navigated` is terminal: the page is torn down once the router moves on.

use shared_types::{AppError, ResetLoginRequest, StatusMessage};
use std::fmt;

use crate::api::ResetLogin;
use crate::nav::{resolve_relative, Navigator, PARENT_ROUTE};

/// Helper text shown under the confirmation field while the values differ.
pub const MISMATCH_HELPER_TEXT: &str = "Passwords do not match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Navigated,
}

/// Result of [`PasswordResetForm::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Send this request; the form is now submitting.
    Send(ResetLoginRequest),
    Mismatch,
    /// A request is already in flight, or the form already navigated away.
    Busy,
}

/// Result of a full [`PasswordResetForm::on_submit`] cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigated(String),
    Failed,
    Mismatch,
    Busy,
}

/// Password, confirmation and submission state for one page visit.
#[derive(Clone, Default, PartialEq)]
pub struct PasswordResetForm {
    password: String,
    confirm_password: String,
    phase: Phase,
}

impl PasswordResetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Empty while the fields agree.
    pub fn confirm_helper_text(&self) -> &'static str {
        if self.passwords_match() {
            ""
        } else {
            MISMATCH_HELPER_TEXT
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True exactly while the reset request is in flight.
    pub fn loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// First half of a submission. On `Send` the caller must issue the
    /// request and hand its result to [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "Ignoring submit while not idle");
            return SubmitDecision::Busy;
        }
        if !self.passwords_match() {
            tracing::debug!("Passwords do not match, not submitting");
            return SubmitDecision::Mismatch;
        }

        self.phase = Phase::Submitting;
        tracing::info!("Submitting password reset");
        SubmitDecision::Send(ResetLoginRequest::new(self.password.clone()))
    }

    /// Second half of a submission. Returns the relative route to navigate to
    /// on success. Failures return the form to `Idle` without any message
    /// for the user.
    pub fn finish_submit(
        &mut self,
        result: Result<StatusMessage, AppError>,
    ) -> Option<&'static str> {
        if self.phase != Phase::Submitting {
            tracing::debug!(phase = ?self.phase, "No submission in flight, ignoring result");
            return None;
        }

        match result {
            Ok(status) => {
                tracing::info!(msg = %status.msg, "Password reset succeeded");
                self.phase = Phase::Navigated;
                Some(PARENT_ROUTE)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password reset failed");
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Submit handler: compare the two fields, send one request when they
    /// agree, and navigate to the parent route on success.
    pub async fn on_submit<C, N>(&mut self, client: &C, navigator: &N) -> SubmitOutcome
    where
        C: ResetLogin + ?Sized,
        N: Navigator + ?Sized,
    {
        let request = match self.begin_submit() {
            SubmitDecision::Send(request) => request,
            SubmitDecision::Mismatch => return SubmitOutcome::Mismatch,
            SubmitDecision::Busy => return SubmitOutcome::Busy,
        };

        let result = client.reset_login(&request).await;

        match self.finish_submit(result) {
            Some(relative) => {
                let target = resolve_relative(&navigator.current_path(), relative);
                navigator.push(&target);
                SubmitOutcome::Navigated(target)
            }
            None => SubmitOutcome::Failed,
        }
    }
}

impl fmt::Debug for PasswordResetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetForm")
            .field("password", &"[redacted]")
            .field("confirm_password", &"[redacted]")
            .field("passwords_match", &self.passwords_match())
            .field("phase", &self.phase)
            .finish()
    }
}

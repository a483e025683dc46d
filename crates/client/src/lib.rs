pub mod api;
pub mod form;
pub mod nav;

#[cfg(feature = "native")]
pub mod config;

#[cfg(feature = "native")]
pub mod telemetry;

pub use api::{OriginApi, ResetLogin, RESET_LOGIN_PATH};
pub use form::{PasswordResetForm, Phase, SubmitDecision, SubmitOutcome, MISMATCH_HELPER_TEXT};
pub use nav::{resolve_relative, Navigator, PARENT_ROUTE};

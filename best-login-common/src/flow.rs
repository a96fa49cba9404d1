//! Login form submission flow

use tracing::debug;

use crate::auth::LoginResponse;
use crate::error::LoginFailure;
use crate::format::format_api_error;
use crate::mock::Authenticator;
use crate::session::{LoginSession, LoginSessionState, SessionStore};
use crate::validation::{validate, FieldErrors, RawLoginForm};
use crate::SUCCESS_PATH;

/// What the login page exposes to the submit flow
pub trait FormSurface {
    /// Replace the inline field messages; an empty set clears them
    fn show_field_errors(&self, errors: FieldErrors);

    fn navigate(&self, path: &str);
}

/// Phase of the form as seen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

impl FormPhase {
    pub fn is_submitting(self) -> bool {
        self == FormPhase::Submitting
    }
}

impl From<&LoginSessionState> for FormPhase {
    fn from(state: &LoginSessionState) -> Self {
        if state.is_loading {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    LoggedIn(LoginResponse),
    Failed(LoginFailure),
}

impl SubmitOutcome {
    /// The call failed without a message the session could record
    pub fn is_unexpected(&self) -> bool {
        matches!(self, SubmitOutcome::Failed(failure) if failure.is_internal())
    }
}

/// Text of the form-level error banner.
///
/// A recorded API error wins; otherwise an unexpected failure shows the
/// generic fallback. Nothing is shown once both are cleared.
pub fn banner_message(api_error: Option<&str>, unexpected: bool) -> Option<String> {
    match api_error {
        Some(error) => Some(format_api_error(Some(error))),
        None if unexpected => Some(format_api_error(None)),
        None => None,
    }
}

/// Handle one form submission.
///
/// The previous API error is cleared first, then the fields are validated;
/// only valid input reaches the session, and only a successful login
/// navigates away.
pub async fn submit_login<A, S, V>(
    session: &LoginSession<A, S>,
    surface: &V,
    raw: RawLoginForm,
) -> SubmitOutcome
where
    A: Authenticator,
    S: SessionStore,
    V: FormSurface,
{
    session.clear_error();

    let request = match validate(&raw) {
        Ok(request) => request,
        Err(errors) => {
            debug!(fields = errors.len(), "login form rejected by validation");
            surface.show_field_errors(errors.clone());
            return SubmitOutcome::Invalid(errors);
        }
    };
    surface.show_field_errors(FieldErrors::default());

    match session.login(&request).await {
        Ok(response) => {
            surface.navigate(SUCCESS_PATH);
            SubmitOutcome::LoggedIn(response)
        }
        Err(failure) => SubmitOutcome::Failed(failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::UNEXPECTED_ERROR;

    #[test]
    fn test_phase_follows_loading_flag() {
        let mut state = LoginSessionState::default();
        assert_eq!(FormPhase::from(&state), FormPhase::Idle);

        state.is_loading = true;
        assert_eq!(FormPhase::from(&state), FormPhase::Submitting);
        assert!(FormPhase::from(&state).is_submitting());
    }

    #[test]
    fn test_banner_hidden_without_failure() {
        assert_eq!(banner_message(None, false), None);
    }

    #[test]
    fn test_banner_falls_back_for_unexpected_failure() {
        assert_eq!(
            banner_message(None, true).as_deref(),
            Some(UNEXPECTED_ERROR)
        );
    }

    #[test]
    fn test_banner_prefers_api_error() {
        assert_eq!(
            banner_message(Some("Invalid password"), true).as_deref(),
            Some("Invalid email or password. Please try again.")
        );
        assert_eq!(
            banner_message(Some("Account locked"), false).as_deref(),
            Some("Account locked")
        );
    }

    #[test]
    fn test_unexpected_outcome() {
        let internal = SubmitOutcome::Failed(LoginFailure::Internal("boom".to_string()));
        let rejected = SubmitOutcome::Failed(LoginFailure::Rejected("Server error".to_string()));

        assert!(internal.is_unexpected());
        assert!(!rejected.is_unexpected());
        assert!(!SubmitOutcome::Invalid(FieldErrors::default()).is_unexpected());
    }
}

//! Login session state machine
//!
//! `LoginSession` is the state-owning side of the login page: it marks the
//! session busy for exactly one authentication call, records a displayable
//! error when the call fails, and hands the outcome back to the caller.
//! Where the state lives is up to the [`SessionStore`]; the UI keeps it in a
//! reactive signal, tests keep it in a `RefCell`.

use tracing::{debug, error, info, warn};

use crate::auth::{LoginRequest, LoginResponse};
use crate::error::LoginFailure;
use crate::mock::Authenticator;

/// Loading and error state of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginSessionState {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Transitions of [`LoginSessionState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// A call started: busy, previous error cleared
    Started,
    /// The call failed with a displayable message
    Failed(String),
    /// The call ended, whatever the outcome
    Settled,
    ClearError,
}

impl LoginSessionState {
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Started => {
                self.is_loading = true;
                self.error = None;
            }
            SessionAction::Failed(message) => self.error = Some(message),
            SessionAction::Settled => self.is_loading = false,
            SessionAction::ClearError => self.error = None,
        }
    }
}

/// Holder of the session state
pub trait SessionStore {
    fn dispatch(&self, action: SessionAction);

    fn snapshot(&self) -> LoginSessionState;
}

/// Releases the busy flag when dropped, so every exit path of a login call
/// settles the session.
struct LoadingGuard<'a, S: SessionStore> {
    store: &'a S,
}

impl<'a, S: SessionStore> LoadingGuard<'a, S> {
    fn start(store: &'a S) -> Self {
        store.dispatch(SessionAction::Started);
        Self { store }
    }
}

impl<S: SessionStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.store.dispatch(SessionAction::Settled);
    }
}

/// Login state hook: wraps an authenticator around a session store
pub struct LoginSession<A, S> {
    auth: A,
    store: S,
}

impl<A: Authenticator, S: SessionStore> LoginSession<A, S> {
    pub fn new(auth: A, store: S) -> Self {
        Self { auth, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn authenticator(&self) -> &A {
        &self.auth
    }

    pub fn is_loading(&self) -> bool {
        self.store.snapshot().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.store.snapshot().error
    }

    /// Run one authentication call.
    ///
    /// Recognized failures are recorded in the session error before being
    /// returned; internal failures are returned with their cause and leave
    /// the error empty.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginFailure> {
        let _loading = LoadingGuard::start(&self.store);
        debug!(email = %request.email, remember = request.remember, "login attempt");

        match self.auth.authenticate(request).await {
            Ok(response) => {
                info!(user_id = response.user.id, "login succeeded");
                Ok(response)
            }
            Err(failure) => {
                match failure.user_message() {
                    Some(message) => {
                        warn!(%failure, "login rejected");
                        self.store.dispatch(SessionAction::Failed(message));
                    }
                    None => error!(%failure, "login failed without a user-facing message"),
                }
                Err(failure)
            }
        }
    }

    pub fn clear_error(&self) {
        self.store.dispatch(SessionAction::ClearError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::User;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store that keeps every intermediate state
    #[derive(Clone, Default)]
    struct RecordingStore {
        state: Rc<RefCell<LoginSessionState>>,
        history: Rc<RefCell<Vec<LoginSessionState>>>,
    }

    impl SessionStore for RecordingStore {
        fn dispatch(&self, action: SessionAction) {
            let mut state = self.state.borrow_mut();
            state.apply(action);
            self.history.borrow_mut().push(state.clone());
        }

        fn snapshot(&self) -> LoginSessionState {
            self.state.borrow().clone()
        }
    }

    /// Authenticator returning a canned result and checking the busy flag
    struct Canned {
        result: Result<LoginResponse, LoginFailure>,
        store: RecordingStore,
        saw_loading: RefCell<bool>,
    }

    impl Authenticator for Canned {
        async fn authenticate(
            &self,
            _request: &LoginRequest,
        ) -> Result<LoginResponse, LoginFailure> {
            *self.saw_loading.borrow_mut() = self.store.snapshot().is_loading;
            self.result.clone()
        }
    }

    fn session(result: Result<LoginResponse, LoginFailure>) -> LoginSession<Canned, RecordingStore> {
        let store = RecordingStore::default();
        let auth = Canned {
            result,
            store: store.clone(),
            saw_loading: RefCell::new(false),
        };
        LoginSession::new(auth, store)
    }

    fn success() -> Result<LoginResponse, LoginFailure> {
        Ok(LoginResponse {
            user: User::new(1, "test@example.com", "password"),
        })
    }

    fn request() -> LoginRequest {
        LoginRequest::new("test@example.com", "password")
    }

    #[test]
    fn test_initial_state() {
        let session = session(success());
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_loading_only_during_call() {
        let session = session(success());

        let response = session.login(&request()).await.unwrap();

        assert_eq!(response.user.id, 1);
        assert!(*session.authenticator().saw_loading.borrow());
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);

        let loading: Vec<bool> = session
            .store()
            .history
            .borrow()
            .iter()
            .map(|state| state.is_loading)
            .collect();
        assert_eq!(loading, vec![true, false]);
    }

    #[tokio::test]
    async fn test_failure_sets_error() {
        let session = session(Err(LoginFailure::Rejected("Invalid credentials".into())));

        let err = session.login(&request()).await.unwrap_err();

        assert_eq!(err, LoginFailure::Rejected("Invalid credentials".into()));
        assert_eq!(session.error().as_deref(), Some("Invalid credentials"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_empty_message_becomes_generic() {
        let session = session(Err(LoginFailure::Rejected(String::new())));

        let _ = session.login(&request()).await;

        assert_eq!(session.error().as_deref(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_internal_failure_leaves_error_empty() {
        let session = session(Err(LoginFailure::Internal("String error".into())));

        let err = session.login(&request()).await.unwrap_err();

        assert!(err.is_internal());
        assert_eq!(session.error(), None);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_new_attempt_clears_previous_error() {
        let store = RecordingStore::default();
        store.dispatch(SessionAction::Failed("First error".into()));

        let auth = Canned {
            result: success(),
            store: store.clone(),
            saw_loading: RefCell::new(false),
        };
        let session = LoginSession::new(auth, store);
        session.login(&request()).await.unwrap();

        let history = session.store().history.borrow();
        // Failed, Started, Settled
        assert_eq!(history[1].error, None);
        assert!(history[1].is_loading);
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_clear_error() {
        let session = session(Err(LoginFailure::Rejected("Test error".into())));
        let _ = session.login(&request()).await;
        assert!(session.error().is_some());

        session.clear_error();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_clear_error_is_idempotent() {
        let session = session(success());
        let before = session.store().snapshot();

        session.clear_error();
        session.clear_error();

        assert_eq!(session.store().snapshot(), before);
    }
}

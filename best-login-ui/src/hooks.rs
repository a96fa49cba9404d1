//! Reactive wrapper around the login session

use std::rc::Rc;

use best_login_common::config::LatencyRange;
use best_login_common::{
    FormPhase, LoginSession, LoginSessionState, MockAuthService, SessionAction, SessionStore,
};
use leptos::*;

use crate::browser::TimerDelay;

/// Session state held in a signal
#[derive(Clone, Copy)]
pub struct SignalSession(RwSignal<LoginSessionState>);

impl SessionStore for SignalSession {
    fn dispatch(&self, action: SessionAction) {
        // Dropped if the page was torn down while the call was pending
        self.0.try_update(|state| state.apply(action));
    }

    fn snapshot(&self) -> LoginSessionState {
        self.0.try_get_untracked().unwrap_or_default()
    }
}

pub type PageSession = LoginSession<MockAuthService<TimerDelay>, SignalSession>;

#[derive(Clone)]
pub struct UseLogin {
    session: Rc<PageSession>,
    state: RwSignal<LoginSessionState>,
}

impl UseLogin {
    pub fn session(&self) -> Rc<PageSession> {
        Rc::clone(&self.session)
    }

    pub fn phase(&self) -> Signal<FormPhase> {
        let state = self.state;
        Signal::derive(move || state.with(|state| FormPhase::from(state)))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.error.clone()))
    }

    pub fn clear_error(&self) {
        self.session.clear_error();
    }
}

/// Login session bound to the calling component
pub fn use_login(latency: LatencyRange) -> UseLogin {
    let state = create_rw_signal(LoginSessionState::default());
    let auth = MockAuthService::new(TimerDelay, latency);

    UseLogin {
        session: Rc::new(LoginSession::new(auth, SignalSession(state))),
        state,
    }
}

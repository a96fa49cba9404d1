//! In-memory authentication service with simulated network latency

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::auth::{LoginRequest, LoginResponse, User};
use crate::config::LatencyRange;
use crate::error::{AuthError, LoginFailure};

/// Suspends the current task for a while
pub trait Delay {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Anything that can answer a login request
pub trait Authenticator {
    fn authenticate(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, LoginFailure>>;
}

/// Accounts accepted by the mock service
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "test@example.com", "1234"),
        User::new(2, "admin@example.com", "admin"),
        User::new(3, "user@test.com", "password"),
    ]
}

/// Mock backend checking credentials against a fixed user table
pub struct MockAuthService<D> {
    users: Vec<User>,
    latency: LatencyRange,
    rng: RefCell<fastrand::Rng>,
    delay: D,
}

impl<D: Delay> MockAuthService<D> {
    pub fn new(delay: D, latency: LatencyRange) -> Self {
        Self::with_rng(delay, latency, fastrand::Rng::new())
    }

    pub fn with_rng(delay: D, latency: LatencyRange, rng: fastrand::Rng) -> Self {
        Self {
            users: default_users(),
            latency,
            rng: RefCell::new(rng),
            delay,
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn delay_source(&self) -> &D {
        &self.delay
    }

    /// Match credentials against the user table without any latency
    pub fn check(&self, request: &LoginRequest) -> Result<User, AuthError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let user = self
            .users
            .iter()
            .find(|user| user.email == request.email)
            .ok_or(AuthError::UserNotFound)?;

        if user.password != request.password {
            return Err(AuthError::InvalidPassword);
        }

        Ok(user.clone())
    }
}

impl<D: Delay> Authenticator for MockAuthService<D> {
    async fn authenticate(&self, request: &LoginRequest) -> Result<LoginResponse, LoginFailure> {
        let latency = self.latency.sample(&mut self.rng.borrow_mut());
        debug!(latency_ms = latency.as_millis() as u64, "simulating login round trip");
        self.delay.delay(latency).await;

        let user = self.check(request)?;
        Ok(LoginResponse { user })
    }
}

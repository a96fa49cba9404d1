//! Common types and logic shared by the login UI
//!
//! Everything here is free of browser APIs: the UI crate plugs storage,
//! timers, navigation and the color-scheme query in through small traits.

pub mod auth;
pub mod config;
pub mod confetti;
pub mod error;
pub mod flow;
pub mod format;
pub mod mock;
pub mod session;
pub mod theme;
pub mod validation;

pub use auth::{LoginRequest, LoginResponse, User};
pub use config::AppConfig;
pub use error::{AuthError, ConfigError, LoginFailure, StorageError};
pub use flow::{banner_message, submit_login, FormPhase, FormSurface, SubmitOutcome};
pub use format::format_api_error;
pub use mock::{Authenticator, Delay, MockAuthService};
pub use session::{LoginSession, LoginSessionState, SessionAction, SessionStore};
pub use theme::{EffectiveTheme, Theme};
pub use validation::{validate, Field, FieldErrors, RawLoginForm};

/// Route of the login form
pub const LOGIN_PATH: &str = "/";

/// Route the user lands on after a successful login
pub const SUCCESS_PATH: &str = "/success";

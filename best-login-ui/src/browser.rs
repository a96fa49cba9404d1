//! Browser adapters for the traits in `best_login_common`

use std::time::Duration;

use best_login_common::theme::{PreferenceStore, DARK_SCHEME_QUERY};
use best_login_common::{Delay, StorageError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MediaQueryList, Storage};

/// Delay backed by a `setTimeout` future
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn delay(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// `window.localStorage`, reached without panicking when the browser
/// disables or denies it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(denied)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?.get_item(key).map_err(denied)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?.set_item(key, value).map_err(denied)
    }
}

fn denied(err: JsValue) -> StorageError {
    StorageError::Denied(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Whether the system asks for a dark scheme, `None` if unknown
pub fn prefers_dark() -> Option<bool> {
    dark_scheme_query().map(|query| query.matches())
}

/// Change listener on the dark color-scheme query, removed on drop
pub struct SchemeListener {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(Event)>,
}

impl SchemeListener {
    pub fn attach(on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let query = dark_scheme_query()?;
        let watched = query.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_change(watched.matches()));

        query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, callback })
    }
}

impl Drop for SchemeListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

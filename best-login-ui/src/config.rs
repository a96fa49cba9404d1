//! Runtime configuration embedded in the host page

use best_login_common::AppConfig;
use tracing::{debug, warn};

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Load the app configuration, falling back to defaults when the page
/// carries none or it does not parse.
pub fn load() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(text) if !text.trim().is_empty() => AppConfig::from_json(&text).unwrap_or_else(|err| {
            warn!(%err, "invalid app config, using defaults");
            AppConfig::default()
        }),
        _ => {
            debug!("no app config found, using defaults");
            AppConfig::default()
        }
    }
}

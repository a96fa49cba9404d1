//! Theme context for the component tree

use best_login_common::theme::{load_theme, save_theme, THEME_ATTRIBUTE};
use best_login_common::{EffectiveTheme, Theme};
use leptos::*;
use tracing::{debug, warn};

use crate::browser::{self, BrowserStorage, SchemeListener};

/// Handle to the current theme, provided by [`ThemeProvider`]
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    effective: Memo<EffectiveTheme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// The stored preference, possibly `auto`
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// The concrete theme after resolving `auto`
    pub fn effective_theme(&self) -> Signal<EffectiveTheme> {
        self.effective.into()
    }

    pub fn set_theme(&self, theme: Theme) {
        debug!(%theme, "theme selected");
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| save_theme(&BrowserStorage, key, theme));
    }

    /// Switch to the explicit opposite of what is shown now
    pub fn toggle_theme(&self) {
        self.set_theme(self.effective.get_untracked().toggled());
    }
}

/// Access the theme context.
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}

#[component]
pub fn ThemeProvider(
    /// Storage key of the persisted preference
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let theme = create_rw_signal(load_theme(&BrowserStorage, &storage_key));
    let prefers_dark = create_rw_signal(browser::prefers_dark());
    let effective = create_memo(move |_| theme.get().resolve(prefers_dark.get()));

    provide_context(ThemeContext {
        theme,
        effective,
        storage_key: store_value(storage_key),
    });

    create_effect(move |_| apply_dom_theme(theme.get()));

    // The system scheme only matters, and is only watched, while on auto
    create_effect(move |previous: Option<Option<SchemeListener>>| {
        drop(previous);
        if theme.get() != Theme::Auto {
            return None;
        }
        prefers_dark.set(browser::prefers_dark());
        SchemeListener::attach(move |dark| prefers_dark.set(Some(dark)))
    });

    children()
}

fn apply_dom_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let result = match theme.dom_attribute() {
        Some(value) => root.set_attribute(THEME_ATTRIBUTE, value),
        None => root.remove_attribute(THEME_ATTRIBUTE),
    };
    if let Err(err) = result {
        warn!(?err, "could not update theme attribute");
    }
}

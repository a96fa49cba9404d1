use best_login_common::Theme;
use leptos::*;

use crate::theme::use_theme;

/// Dropdown picking light, dark or auto
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let context = use_theme();
    let theme = context.theme();
    let (is_open, set_is_open) = create_signal(false);

    view! {
        <div class="theme-switcher">
            <button
                type="button"
                class="theme-switcher-button"
                aria-label="Toggle theme"
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {move || theme.get().icon()}
            </button>
            <Show when=move || is_open.get()>
                <div class="theme-switcher-dropdown" role="menu" aria-label="Theme options">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let is_active = move || theme.get() == option;
                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=move || if is_active() {
                                        "theme-switcher-option theme-switcher-option-active"
                                    } else {
                                        "theme-switcher-option"
                                    }
                                    aria-current=move || is_active().then_some("true")
                                    on:click=move |_| {
                                        context.set_theme(option);
                                        set_is_open.set(false);
                                    }
                                >
                                    <span class="theme-option-icon" aria-hidden="true">{option.icon()}</span>
                                    <span>{option.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="theme-switcher-overlay" on:click=move |_| set_is_open.set(false)></div>
            </Show>
        </div>
    }
}

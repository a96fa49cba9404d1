//! Best Login Form
//!
//! Client-side login page with a mock authentication service, inline
//! validation, theme switching and a celebratory success page.

use best_login_common::{LOGIN_PATH, SUCCESS_PATH};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod browser;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod theme;

use pages::{LoginPage, SuccessPage};
use theme::ThemeProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();
    let storage_key = config.theme_storage_key.clone();
    provide_context(config);

    view! {
        <Title text="Best Login Form"/>
        <ThemeProvider storage_key=storage_key>
            <Router>
                <Routes>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=SUCCESS_PATH view=SuccessPage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

use best_login_common::LOGIN_PATH;
use leptos::*;
use leptos_router::A;

use crate::components::{ConfettiCanvas, ThemeSwitcher};

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="top-container">
                <A href=LOGIN_PATH class="back-link">"← Back to Login"</A>
                <ThemeSwitcher/>
            </div>
            <main class="success-content">
                <div class="icon-wrapper" aria-hidden="true">"✓"</div>
                <div class="text-container">
                    <h1 class="success-title">"Success!"</h1>
                    <p class="success-subtitle">"You have successfully logged in! 🎉"</p>
                </div>
            </main>
            <ConfettiCanvas/>
        </div>
    }
}

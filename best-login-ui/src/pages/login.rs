use best_login_common::{
    banner_message, submit_login, AppConfig, Field, FieldErrors, FormSurface, RawLoginForm,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::components::{ApiAlert, CheckboxField, InputField, ThemeSwitcher};
use crate::hooks::use_login;

/// The page as seen by the submit flow
struct PageSurface<N> {
    field_errors: RwSignal<FieldErrors>,
    navigate: N,
}

impl<N: Fn(&str, NavigateOptions)> FormSurface for PageSurface<N> {
    fn show_field_errors(&self, errors: FieldErrors) {
        let _ = self.field_errors.try_set(errors);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let login = use_login(config.latency);
    let navigate = use_navigate();

    let field_errors = create_rw_signal(FieldErrors::default());
    // Set when the call failed without a message worth showing
    let unexpected = create_rw_signal(false);
    let phase = login.phase();
    let is_submitting = Signal::derive(move || phase.get().is_submitting());
    let api_error = login.error();

    let email_ref = create_node_ref::<html::Input>();
    let password_ref = create_node_ref::<html::Input>();
    let remember_ref = create_node_ref::<html::Input>();

    let email_error = Signal::derive(move || field_errors.with(|errors| errors.get(Field::Email)));
    let password_error =
        Signal::derive(move || field_errors.with(|errors| errors.get(Field::Password)));

    let banner = Signal::derive(move || {
        api_error.with(|error| banner_message(error.as_deref(), unexpected.get()))
    });

    let dismiss = Callback::new({
        let login = login.clone();
        move |_: ()| {
            login.clear_error();
            unexpected.set(false);
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        unexpected.set(false);

        let raw = RawLoginForm {
            email: email_ref.get_untracked().map(|input| input.value()),
            password: password_ref.get_untracked().map(|input| input.value()),
            remember: remember_ref.get_untracked().map(|input| input.checked()),
        };
        let session = login.session();
        let surface = PageSurface {
            field_errors,
            navigate: navigate.clone(),
        };

        spawn_local(async move {
            let outcome = submit_login(&*session, &surface, raw).await;
            if outcome.is_unexpected() {
                let _ = unexpected.try_set(true);
            }
        });
    };

    view! {
        <div class="page-container">
            <main class="form-section">
                <header class="header">
                    <div class="header-left">
                        <div class="logo" aria-hidden="true">"</>"</div>
                        <div class="app-title">"Best Login Form"</div>
                    </div>
                    <div class="header-right">
                        <ThemeSwitcher/>
                    </div>
                </header>

                <div class="main-content">
                    <div class="form-container">
                        <h1 class="form-title">"Sign in to your account"</h1>

                        <form class="form" on:submit=on_submit>
                            <ApiAlert message=banner on_dismiss=dismiss/>

                            <InputField
                                id="request-email"
                                name="email"
                                label="Email"
                                input_type="email"
                                placeholder="example@youremail.com"
                                required=true
                                error=email_error
                                input_ref=email_ref
                            />
                            <InputField
                                id="request-password"
                                name="password"
                                label="Password"
                                input_type="password"
                                placeholder="your password"
                                required=true
                                min_length=4
                                error=password_error
                                input_ref=password_ref
                            />

                            <div class="checkbox-wrapper">
                                <CheckboxField
                                    id="request-remember"
                                    name="remember"
                                    label="Remember me"
                                    disabled=is_submitting
                                    input_ref=remember_ref
                                />
                            </div>

                            <div>
                                <button
                                    type="submit"
                                    class=move || if is_submitting.get() {
                                        "submit-button submit-button-loading"
                                    } else {
                                        "submit-button"
                                    }
                                    disabled=move || is_submitting.get()
                                    aria-busy=move || is_submitting.get().to_string()
                                    aria-describedby=move || is_submitting.get().then_some("loading-status")
                                >
                                    {move || if is_submitting.get() {
                                        view! {
                                            <span class="loading-spinner" aria-hidden="true"></span>
                                            <span>"Signing In..."</span>
                                        }
                                        .into_view()
                                    } else {
                                        "Sign In".into_view()
                                    }}
                                </button>
                                <Show when=move || is_submitting.get()>
                                    <div id="loading-status" class="loading-message" role="status" aria-live="polite">
                                        "Please wait while we sign you in..."
                                    </div>
                                </Show>
                            </div>
                        </form>
                    </div>
                </div>
            </main>
        </div>
    }
}

use leptos::*;

/// Banner for a failed login.
///
/// Renders nothing while `message` is `None`. Each new message takes focus
/// so screen readers announce it.
#[component]
pub fn ApiAlert(
    /// User-facing message to display
    #[prop(into)]
    message: Signal<Option<String>>,
    /// Callback for the dismiss button
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            let alert_ref = create_node_ref::<html::Div>();
            alert_ref.on_load(|alert| {
                request_animation_frame(move || {
                    let _ = alert.focus();
                });
            });

            view! {
                <div class="alert alert-error" role="alert" aria-live="assertive" tabindex="-1" node_ref=alert_ref>
                    <div class="alert-icon" aria-hidden="true">"⚠️"</div>
                    <div class="alert-content">
                        <div class="alert-title">"Error"</div>
                        <div class="alert-message">{text}</div>
                    </div>
                    {on_dismiss.map(|on_dismiss| view! {
                        <button
                            type="button"
                            class="alert-dismiss"
                            aria-label="Dismiss error message"
                            on:click=move |_| on_dismiss.call(())
                        >
                            "✕"
                        </button>
                    })}
                </div>
            }
        })
    }
}

use leptos::*;

/// Labelled text input with an inline validation message
#[component]
pub fn InputField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] min_length: Option<u32>,
    /// Validation message shown under the input
    #[prop(into)]
    error: Signal<Option<&'static str>>,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let aria_describedby = {
        let error_id = error_id.clone();
        move || error.get().map(|_| error_id.clone())
    };

    view! {
        <div class="input-container">
            <label class="input-label" for=id>{label}</label>
            <input
                class=move || if error.get().is_some() { "input input-error" } else { "input" }
                id=id
                name=name
                type=input_type
                placeholder=placeholder
                required=required
                minlength=min_length.map(|n| n.to_string())
                aria-describedby=aria_describedby
                aria-invalid=move || error.get().map(|_| "true")
                node_ref=input_ref
            />
            {move || error.get().map(|message| view! {
                <div id=error_id.clone() class="message-error" role="alert" aria-live="polite">
                    {message}
                </div>
            })}
        </div>
    }
}
